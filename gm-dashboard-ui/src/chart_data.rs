//! JSON payloads for the D3.js charts.
//!
//! Kept free of any DOM access so they can be built and checked natively.

use crate::theme;
use gm_calc::report::EmissionReport;
use serde::Serialize;

/// One labelled value of a pie or bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Optimized emission share per category; zero categories get no slice.
pub fn pie_points(report: &EmissionReport) -> Vec<ChartPoint> {
    report
        .pie_slices()
        .into_iter()
        .map(|row| ChartPoint {
            label: row.name.to_string(),
            value: row.optimized,
            color: theme::category_color(row.category),
        })
        .collect()
}

/// Baseline vs optimized totals.
pub fn bar_points(report: &EmissionReport) -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            label: "Baseline".to_string(),
            value: report.baseline_total,
            color: theme::BASELINE_COLOR,
        },
        ChartPoint {
            label: "Optimized".to_string(),
            value: report.optimized_total,
            color: theme::OPTIMIZED_COLOR,
        },
    ]
}

pub fn pie_config() -> serde_json::Value {
    serde_json::json!({
        "title": "Emission Share by Category (Optimized)",
        "unit": "t CO₂e",
        "background": theme::BACKGROUND,
        "textColor": theme::TEXT,
    })
}

pub fn bar_config() -> serde_json::Value {
    serde_json::json!({
        "title": "Total Emissions – Baseline vs Optimized",
        "yAxisLabel": "Tons CO₂e",
        "unit": "t CO₂e",
        "background": theme::BACKGROUND,
        "textColor": theme::TEXT,
    })
}
