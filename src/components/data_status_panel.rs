use yew::prelude::*;

use crate::hooks::use_fetch::FetchState;
use crate::models::status::{DataStatus, SeriesStatus};

#[derive(Properties, PartialEq)]
pub struct DataStatusPanelProps {
    pub state: FetchState<DataStatus>,
}

/// Row counts and newest timestamps of the stored historical series
#[function_component(DataStatusPanel)]
pub fn data_status_panel(props: &DataStatusPanelProps) -> Html {
    let state = &props.state;

    match (state.data(), state.error()) {
        (Some(status), _) => html! {
            <table class="data-status">
                <tr><th>{"Series"}</th><th>{"Rows"}</th><th>{"Latest"}</th></tr>
                {series_row("Generation", &status.generation)}
                {series_row("Price", &status.price)}
            </table>
        },
        (None, Some(error)) => html! {
            <p class="data-status-error">{"Data status unavailable: "}{error}</p>
        },
        (None, None) => html! {
            <p class="data-status-loading">{"Checking stored data..."}</p>
        },
    }
}

fn series_row(name: &str, series: &SeriesStatus) -> Html {
    let latest = if series.has_data() {
        series.latest_timestamp.clone().unwrap_or_else(|| "-".to_string())
    } else {
        "No data".to_string()
    };

    html! {
        <tr>
            <td>{name}</td>
            <td>{series.count}</td>
            <td>{latest}</td>
        </tr>
    }
}
