use yew::prelude::*;

use crate::components::accuracy_panel::AccuracyPanel;
use crate::components::forecast_chart::ForecastChart;
use crate::components::horizon_selector::HorizonSelector;
use crate::components::upload_panel::UploadPanel;
use crate::config::Config;
use crate::hooks::use_accuracy::use_accuracy;
use crate::hooks::use_fetch::FetchState;
use crate::hooks::use_forecast::use_forecast;
use crate::hooks::use_horizon::use_horizon;

/// Which top-level view the dashboard renders
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Error(String),
    Content,
}

/// Picks the dashboard view from the forecast state alone.
///
/// Loading wins over an error, and the accuracy state never takes part.
pub fn dashboard_view<T>(forecast: &FetchState<T>) -> DashboardView {
    if forecast.is_loading() {
        DashboardView::Loading
    } else if let Some(error) = forecast.error() {
        DashboardView::Error(error.to_string())
    } else {
        DashboardView::Content
    }
}

/// One callback that emits every callback in `targets`, once each
pub fn refetch_all(targets: Vec<Callback<()>>) -> Callback<()> {
    Callback::from(move |()| {
        for target in &targets {
            target.emit(());
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    #[prop_or_else(|| Config::DEFAULT_AREA.to_string())]
    pub area: String,
    #[prop_or(Config::DEFAULT_DAYS)]
    pub days: u32,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let horizon = use_horizon();
    let forecast = use_forecast(props.area.clone(), horizon.horizon.hours());
    let accuracy = use_accuracy(props.area.clone(), props.days);

    let on_upload_success = use_memo(
        (forecast.refetch.clone(), accuracy.refetch.clone()),
        |(forecast, accuracy)| refetch_all(vec![forecast.clone(), accuracy.clone()]),
    );

    match dashboard_view(&*forecast.state) {
        DashboardView::Loading => html! {
            <div class="dashboard">
                <div class="loading-container">
                    <div class="spinner"></div>
                    <p>{"Loading forecast..."}</p>
                </div>
            </div>
        },
        DashboardView::Error(message) => {
            let onclick = {
                let refetch = forecast.refetch.clone();
                Callback::from(move |_: MouseEvent| refetch.emit(()))
            };

            html! {
                <div class="dashboard">
                    <div class="error-container">
                        <h2>{"Something went wrong"}</h2>
                        <p>{message}</p>
                        <button class="retry-button" {onclick}>{"Retry"}</button>
                        <div class="error-hint">
                            <p><strong>{"Hints:"}</strong></p>
                            <ul>
                                <li>{"The forecast models may not be trained yet. Run the training script first."}</li>
                                <li>{"Make sure the backend is running."}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            }
        }
        DashboardView::Content => html! {
            <div class="dashboard">
                <div class="dashboard-header">
                    <h2>{"Renewable Generation and Power Price Forecast"}</h2>
                    <p class="subtitle">
                        {format!("Area: {} - {}", props.area, horizon.horizon.description())}
                    </p>
                    <HorizonSelector
                        horizon={horizon.horizon}
                        on_change={horizon.set_horizon.clone()}
                    />
                </div>

                <UploadPanel on_upload_success={(*on_upload_success).clone()} />

                <div class="dashboard-grid">
                    <div class="dashboard-panel left-panel">
                        <h3>{format!("Forecast ({})", horizon.horizon)}</h3>
                        if let Some(bundle) = forecast.state.data() {
                            <ForecastChart bundle={bundle.clone()} />
                        }
                    </div>
                    <div class="dashboard-panel right-panel">
                        <AccuracyPanel state={(*accuracy.state).clone()} />
                    </div>
                </div>

                if let Some(bundle) = forecast.state.data() {
                    <div class="info-footer">
                        <p>{format!("Forecast generated at {}", bundle.generated_at_label())}</p>
                    </div>
                }
            </div>
        },
    }
}
