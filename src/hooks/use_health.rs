use yew::prelude::*;

use super::use_fetch::{FetchHandle, use_fetch};
use crate::models::status::HealthStatus;
use crate::services::api::fetch_health;

/// Backend health, checked once on mount
#[hook]
pub fn use_health() -> FetchHandle<HealthStatus> {
    use_fetch("health", (), |()| fetch_health())
}
