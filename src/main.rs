use forecast_dashboard::components::{Dashboard, HealthBadge};
use forecast_dashboard::config::Config;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Power Forecast Dashboard"}</h1>
                <HealthBadge />
            </header>

            <main class="app-main">
                <Dashboard />
            </main>

            <footer class="app-footer">
                <p>{"Forecasts are refreshed after every successful data upload."}</p>
            </footer>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(Config::LOG_LEVEL));
    log::info!("Starting forecast dashboard");
    yew::Renderer::<App>::new().render();
}
