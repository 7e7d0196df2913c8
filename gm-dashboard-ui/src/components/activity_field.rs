//! Number inputs for activity data.

use crate::state::{activity_label, parse_non_negative, AppState};
use crate::theme;
use dioxus::prelude::*;
use gm_core::category::Category;

fn field_style() -> String {
    format!(
        "width: 100%; box-sizing: border-box; padding: 6px 8px; background: {}; color: {}; border: 1px solid {}; border-radius: 6px;",
        theme::PANEL,
        theme::TEXT,
        theme::BORDER
    )
}

/// Number input bound to one factor-driven activity measure.
#[component]
pub fn ActivityField(category: Category) -> Element {
    let mut state = use_context::<AppState>();
    let value = state
        .inputs
        .read()
        .activity(category)
        .unwrap_or_default();
    let label = activity_label(category);
    let input_id = format!("activity-{}", category.key());
    let style = field_style();

    let on_change = move |evt: Event<FormData>| {
        if let Some(value) = parse_non_negative(&evt.value()) {
            state.set_activity(category, value);
        }
    };

    rsx! {
        div {
            style: "margin: 6px 0;",
            label {
                r#for: "{input_id}",
                style: "display: block; font-size: 13px; margin-bottom: 2px;",
                "{label}"
            }
            input {
                id: "{input_id}",
                r#type: "number",
                min: "0",
                step: "any",
                value: "{value}",
                style: "{style}",
                onchange: on_change,
            }
        }
    }
}

/// Number input for one subcontractor's reported tons CO2e.
#[component]
pub fn SubcontractorField(index: usize) -> Element {
    let mut state = use_context::<AppState>();
    let value = state.inputs.read().subcontractor(index);
    let number = index + 1;
    let input_id = format!("subcontractor-{}", number);
    let style = field_style();

    let on_change = move |evt: Event<FormData>| {
        if let Some(tons) = parse_non_negative(&evt.value()) {
            state.set_subcontractor(index, tons);
        }
    };

    rsx! {
        div {
            style: "margin: 6px 0;",
            label {
                r#for: "{input_id}",
                style: "display: block; font-size: 13px; margin-bottom: 2px;",
                "Subcontractor #{number}"
            }
            input {
                id: "{input_id}",
                r#type: "number",
                min: "0",
                step: "any",
                value: "{value}",
                style: "{style}",
                onchange: on_change,
            }
        }
    }
}
