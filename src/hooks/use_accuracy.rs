use yew::prelude::*;

use super::use_fetch::{FetchHandle, use_fetch};
use crate::models::accuracy::AccuracySummary;
use crate::services::api::fetch_accuracy;

/// MAPE summary for `area` over the last `days`
#[hook]
pub fn use_accuracy(area: String, days: u32) -> FetchHandle<AccuracySummary> {
    use_fetch("accuracy", (area, days), |(area, days)| {
        fetch_accuracy(area, days)
    })
}
