//! Assumptions box under the results.

use crate::theme;
use dioxus::prelude::*;
use gm_core::factors::ASSUMPTIONS;

#[component]
pub fn AssumptionsNote() -> Element {
    let style = format!(
        "padding: 12px 16px; margin: 8px 0; background: {}; color: {}; border-radius: 6px; font-size: 13px;",
        theme::INFO_BACKGROUND,
        theme::INFO_TEXT
    );

    rsx! {
        h3 { "Assumptions" }
        div {
            style: "{style}",
            "{ASSUMPTIONS}"
        }
    }
}
