//! Section header with title and optional unit explanation.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section title
    pub title: String,
    /// Unit explanation (e.g., "Metric tons CO₂e per year")
    #[props(default = String::new())]
    pub unit_description: String,
}

/// Header for dashboard sections showing title and optional unit description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let title_style = format!("margin: 0 0 4px 0; font-size: 16px; color: {};", theme::TEXT);
    let unit_style = format!("margin: 0; font-size: 12px; color: {};", theme::MUTED_TEXT);

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "{title_style}",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "{unit_style}",
                    "{props.unit_description}"
                }
            }
        }
    }
}
