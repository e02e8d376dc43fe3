use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::services::api::Horizon;

/// Stored as the plain hour count so a renamed variant never loses the choice
const HOURS_KEY: &str = "forecast_hours";

#[derive(Clone, PartialEq)]
pub struct HorizonHandle {
    pub horizon: Horizon,
    pub set_horizon: Callback<Horizon>,
}

/// Horizon for a stored hour count; unknown or missing values give the default
pub fn restore_horizon(stored_hours: Option<u32>) -> Horizon {
    stored_hours
        .and_then(Horizon::from_hours)
        .unwrap_or_default()
}

/// Forecast horizon chosen by the user, remembered across reloads
#[hook]
pub fn use_horizon() -> HorizonHandle {
    let horizon = use_state(|| restore_horizon(LocalStorage::get::<u32>(HOURS_KEY).ok()));

    let set_horizon = {
        let horizon = horizon.clone();
        use_callback((), move |next: Horizon, _| {
            if let Err(e) = LocalStorage::set(HOURS_KEY, next.hours()) {
                log::warn!("Could not remember forecast horizon {next}: {e:?}");
            }
            log::debug!("Forecast horizon set to {next}");
            horizon.set(next);
        })
    };

    HorizonHandle {
        horizon: *horizon,
        set_horizon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_known_hours() {
        assert_eq!(restore_horizon(Some(24)), Horizon::Day);
        assert_eq!(restore_horizon(Some(72)), Horizon::ThreeDays);
    }

    #[test]
    fn test_restore_falls_back_to_default() {
        assert_eq!(restore_horizon(None), Horizon::TwoDays);
        assert_eq!(restore_horizon(Some(36)), Horizon::TwoDays);
    }
}
