//! Percentage sliders for the what-if levers.

use crate::state::{parse_pct, AppState, Lever};
use crate::theme;
use dioxus::prelude::*;

/// Range slider (0-100, step 1) bound to one adjustment lever.
#[component]
pub fn AdjustmentSlider(lever: Lever) -> Element {
    let mut state = use_context::<AppState>();
    let pct = lever.get(&state.adjustments.read());
    let label = lever.label();
    let value_style = format!("float: right; color: {}; font-weight: 600;", theme::ACCENT);
    let slider_style = format!("width: 100%; accent-color: {};", theme::ACCENT);

    let on_input = move |evt: Event<FormData>| {
        if let Some(pct) = parse_pct(&evt.value()) {
            state.set_lever(lever, pct);
        }
    };

    rsx! {
        div {
            style: "margin: 10px 0;",
            label {
                style: "display: block; font-size: 13px; margin-bottom: 4px;",
                "{label}"
                span {
                    style: "{value_style}",
                    "{pct:.0}"
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                step: "1",
                value: "{pct}",
                style: "{slider_style}",
                oninput: on_input,
            }
        }
    }
}
