use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        Symbol, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::forecast::{ChartRow, ForecastBundle};
use crate::utils::debounce::on_resize_settled;

const CHART_ID: &str = "forecast-chart";

const GENERATION_COLOR: &str = "#8884d8";
const PRICE_COLOR: &str = "#82ca9d";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub bundle: Rc<ForecastBundle>,
}

/// Generation and price forecasts on a shared time axis
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let container_ref = use_node_ref();
    let rows = use_memo(props.bundle.clone(), |bundle| bundle.chart_rows().map(Rc::new));

    {
        let container_ref = container_ref.clone();
        let rows = rows.clone();

        use_effect_with((rows, container_ref), |(rows, container_ref)| {
            let listener = match (&**rows, container_ref.cast::<HtmlElement>()) {
                (Ok(rows), Some(container)) => {
                    render_chart(&container, rows);

                    let rows = rows.clone();
                    on_resize_settled(
                        move || render_chart(&container, &rows),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                }
                _ => None,
            };

            move || drop(listener)
        });
    }

    match &*rows {
        Ok(_) => html! {
            <div class="forecast-chart-container" ref={container_ref}>
                <div id={CHART_ID} />
            </div>
        },
        Err(e) => html! {
            <div class="forecast-chart-container chart-error" ref={container_ref}>
                <p>{"Forecast data is inconsistent: "}{e.to_string()}</p>
            </div>
        },
    }
}

fn render_chart(container: &HtmlElement, rows: &[ChartRow]) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(rows);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        log::error!("Forecast chart render error: {e:?}");
    }
}

fn build_chart(rows: &[ChartRow]) -> CharmingChart {
    let labels: Vec<String> = rows.iter().map(|r| r.time.clone()).collect();
    let generation: Vec<f64> = rows.iter().map(|r| r.generation_value).collect();
    let price: Vec<f64> = rows.iter().map(|r| r.price_value).collect();

    // Show about a dozen labels whatever the horizon
    let label_interval = (rows.len() / Config::CHART_LABEL_COUNT) as f64;

    let split_line = || {
        SplitLine::new().line_style(
            LineStyle::new()
                .color(GRID_COLOR)
                .type_(LineStyleType::Dashed),
        )
    };

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)),
        )
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("6%")
                .right("6%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(
                    AxisLabel::new()
                        .rotate(45)
                        .color(AXIS_COLOR)
                        .interval(label_interval),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Generation (MW)")
                .axis_label(AxisLabel::new().color(GENERATION_COLOR))
                .split_line(split_line()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Price (JPY/kWh)")
                .axis_label(AxisLabel::new().color(PRICE_COLOR)),
        )
        .series(
            Line::new()
                .name("Generation")
                .symbol(Symbol::None)
                .smooth(true)
                .y_axis_index(0)
                .line_style(LineStyle::new().color(GENERATION_COLOR).width(2))
                .data(generation),
        )
        .series(
            Line::new()
                .name("Price")
                .symbol(Symbol::None)
                .smooth(true)
                .y_axis_index(1)
                .line_style(LineStyle::new().color(PRICE_COLOR).width(2))
                .data(price),
        )
}
