use crate::hooks::use_health::use_health;
use yew::prelude::*;

/// Backend reachability indicator for the page header
#[function_component(HealthBadge)]
pub fn health_badge() -> Html {
    let health = use_health();
    let state = &*health.state;

    let onclick = {
        let refetch = health.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let (class, text) = match (state.data(), state.error()) {
        _ if state.is_loading() => ("health-badge loading", "Checking backend...".to_string()),
        (_, Some(error)) => ("health-badge error", format!("Backend unreachable: {error}")),
        (Some(status), None) if status.is_ok() => (
            "health-badge ok",
            status
                .message
                .clone()
                .unwrap_or_else(|| "Backend online".to_string()),
        ),
        (Some(status), None) => ("health-badge error", format!("Backend status: {}", status.status)),
        (None, None) => ("health-badge loading", "Checking backend...".to_string()),
    };

    html! {
        <button type="button" {class} {onclick} title="Check backend status again">
            {text}
        </button>
    }
}
