use yew::prelude::*;

use super::use_fetch::{FetchHandle, use_fetch};
use crate::models::forecast::ForecastBundle;
use crate::services::api::fetch_latest_prediction;

/// Latest forecast for `area`, re-fetched whenever `area` or `hours` changes
#[hook]
pub fn use_forecast(area: String, hours: u32) -> FetchHandle<ForecastBundle> {
    use_fetch("forecast", (area, hours), |(area, hours)| {
        fetch_latest_prediction(area, hours)
    })
}
