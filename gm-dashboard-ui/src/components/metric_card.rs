//! Headline metric cards shown after a calculation.

use crate::theme;
use dioxus::prelude::*;
use gm_calc::report::EmissionReport;
use gm_utils::format::{format_percent, format_tons};

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: String,
}

/// A single labelled figure on a dark card.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let card_style = format!("{} margin: 8px 0;", theme::panel_style());
    let label_style = format!("font-size: 12px; color: {};", theme::MUTED_TEXT);

    rsx! {
        div {
            style: "{card_style}",
            div {
                style: "{label_style}",
                "{props.label}"
            }
            div {
                style: "font-size: 24px; font-weight: 600;",
                "{props.value}"
            }
        }
    }
}

/// Baseline, optimized, reduction and percent reduction cards for a report.
#[component]
pub fn MetricSummary(report: EmissionReport) -> Element {
    rsx! {
        MetricCard {
            label: "Baseline total (tons CO₂e)".to_string(),
            value: format_tons(report.baseline_total),
        }
        MetricCard {
            label: "Optimized total (tons CO₂e)".to_string(),
            value: format_tons(report.optimized_total),
        }
        MetricCard {
            label: "Reduction (tons)".to_string(),
            value: format_tons(report.reduction_tons),
        }
        MetricCard {
            label: "Percent reduction".to_string(),
            value: format_percent(report.percent_reduction),
        }
    }
}
