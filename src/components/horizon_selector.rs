use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::api::Horizon;

#[derive(Properties, PartialEq)]
pub struct HorizonSelectorProps {
    pub horizon: Horizon,
    pub on_change: Callback<Horizon>,
}

/// Forecast horizon dropdown
#[function_component(HorizonSelector)]
pub fn horizon_selector(props: &HorizonSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            match target.value().parse::<Horizon>() {
                Ok(horizon) => callback.emit(horizon),
                Err(e) => log::warn!("Ignoring horizon selection: {e}"),
            }
        })
    };

    html! {
        <select
            class="horizon-selector"
            onchange={on_change}
            aria-label="Select forecast horizon"
            title="Select forecast horizon"
        >
            {
                Horizon::all().iter().map(|h| {
                    let value = h.hours().to_string();
                    let selected = *h == props.horizon;
                    html! {
                        <option {value} {selected}>{h.description()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
