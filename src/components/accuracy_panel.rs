use crate::hooks::use_fetch::FetchState;
use crate::models::accuracy::{AccuracySummary, AccuracyTier, classify, format_mape};
use std::rc::Rc;
use yew::prelude::*;

/// What the accuracy panel shows, independent of the forecast
#[derive(Debug, Clone, PartialEq)]
pub enum AccuracyView {
    Loading,
    Error(String),
    Summary(Rc<AccuracySummary>),
}

/// Loading wins, then an error, then the last summary.
///
/// A refetch in flight hides the previous tiers, and a failed refetch is
/// reported even when older data is still held.
pub fn accuracy_view(state: &FetchState<AccuracySummary>) -> AccuracyView {
    if state.is_loading() {
        return AccuracyView::Loading;
    }

    match (state.error(), state.data()) {
        (Some(error), _) => AccuracyView::Error(error.to_string()),
        (None, Some(summary)) => AccuracyView::Summary(summary.clone()),
        (None, None) => AccuracyView::Loading,
    }
}

#[derive(Properties, PartialEq)]
pub struct AccuracyPanelProps {
    pub state: FetchState<AccuracySummary>,
}

#[function_component(AccuracyPanel)]
pub fn accuracy_panel(props: &AccuracyPanelProps) -> Html {
    let body = match accuracy_view(&props.state) {
        AccuracyView::Loading => html! {
            <p class="accuracy-loading">{"Loading accuracy..."}</p>
        },
        AccuracyView::Error(error) => html! {
            <p class="accuracy-error">{"Could not load accuracy: "}{error}</p>
        },
        AccuracyView::Summary(summary) => summary_view(&summary),
    };

    html! {
        <div class="accuracy-panel">
            <h2>{"Forecast Accuracy"}</h2>
            {body}
        </div>
    }
}

fn summary_view(summary: &AccuracySummary) -> Html {
    html! {
        <>
            <p class="accuracy-period">
                {format!("Last {} days (MAPE: mean absolute percentage error)", summary.period_days)}
            </p>
            <div class="accuracy-grid">
                {metric_card("Generation", summary.generation_mape)}
                {metric_card("Price", summary.price_mape)}
            </div>
            if summary.is_empty() {
                <p class="accuracy-hint">
                    {"Not enough actual data yet. Upload historical CSV files to compare forecasts against actuals."}
                </p>
            }
            if !summary.note.is_empty() {
                <p class="accuracy-note">{summary.note.clone()}</p>
            }
            {legend()}
        </>
    }
}

fn metric_card(title: &str, mape: Option<f64>) -> Html {
    let tier = classify(mape);
    let class = format!("accuracy-item {}", tier.css_class());

    html! {
        <div {class}>
            <h3>{title}</h3>
            <p class="accuracy-value" style={format!("color: {}", tier.color())}>
                {format_mape(mape)}
            </p>
            <div class="accuracy-badge" style={format!("background-color: {}", tier.color())}>
                {tier.label()}
            </div>
        </div>
    }
}

fn legend() -> Html {
    html! {
        <ul class="accuracy-legend">
            {
                AccuracyTier::all().iter()
                    .filter(|tier| **tier != AccuracyTier::Absent)
                    .map(|tier| html! {
                        <li>
                            <span class="legend-swatch" style={format!("background-color: {}", tier.color())} />
                            {format!("{}: {}", tier.label(), tier.range_description())}
                        </li>
                    })
                    .collect::<Html>()
            }
        </ul>
    }
}
