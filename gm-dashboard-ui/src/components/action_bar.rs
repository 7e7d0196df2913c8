//! Header row with the Load Sample Data, Reset and Calculate buttons.

use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;

/// The three session actions.
#[component]
pub fn ActionBar() -> Element {
    let mut state = use_context::<AppState>();
    let button_style = theme::button_style();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin: 12px 0;",
            button {
                style: "{button_style}",
                onclick: move |_| state.load_sample(),
                "Load Sample Data"
            }
            button {
                style: "{button_style}",
                onclick: move |_| state.reset(),
                "Reset"
            }
            button {
                style: "{button_style}",
                onclick: move |_| state.calculate(),
                "Calculate"
            }
        }
    }
}
