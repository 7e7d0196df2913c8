//! Green Meter - Carbon-Aware Logistics Dashboard
//!
//! Single-page dashboard that estimates yearly CO2e emissions of a
//! logistics operation and explores what-if reductions.
//!
//! Data flow:
//! 1. On mount the session state is pre-populated with the sample scenario.
//! 2. The user edits activity fields and slider positions; every edit clears
//!    the previous result.
//! 3. "Calculate" clamps the inputs, runs the calculator and stores an
//!    `EmissionReport` in the session state.
//! 4. Whenever a new report is stored, the pie and bar charts are rendered
//!    via D3.js.

use dioxus::prelude::*;
use gm_core::category::Category;
use gm_core::inputs::MAX_SUBCONTRACTORS;
use gm_dashboard_ui::chart_data;
use gm_dashboard_ui::components::{
    ActionBar, ActivityField, AdjustmentSlider, AssumptionsNote, BreakdownTable, ChartContainer,
    ChartHeader, ErrorDisplay, MetricSummary, SubcontractorField,
};
use gm_dashboard_ui::js_bridge;
use gm_dashboard_ui::state::{AppState, Lever};
use gm_dashboard_ui::theme;

/// DOM id for the optimized emission share pie chart.
const PIE_CHART_ID: &str = "emission-share-chart";
/// DOM id for the baseline vs optimized bar chart.
const BAR_CHART_ID: &str = "emission-totals-chart";

const APP_TITLE: &str = "Green Meter App";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("green-meter-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: one-time page setup ───
    use_effect(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(APP_TITLE);
        }
        js_bridge::init_charts();
    });

    // ─── Effect 2: render charts whenever a new report is stored ───
    use_effect(move || {
        let Some(report) = (state.report)() else {
            return;
        };

        let pie_json = serde_json::to_string(&chart_data::pie_points(&report));
        let bar_json = serde_json::to_string(&chart_data::bar_points(&report));
        match (pie_json, bar_json) {
            (Ok(pie_json), Ok(bar_json)) => {
                js_bridge::render_pie_chart(
                    PIE_CHART_ID,
                    &pie_json,
                    &chart_data::pie_config().to_string(),
                );
                js_bridge::render_bar_chart(
                    BAR_CHART_ID,
                    &bar_json,
                    &chart_data::bar_config().to_string(),
                );
            }
            (Err(e), _) | (_, Err(e)) => {
                log::error!("Failed to serialize chart data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to prepare chart data: {}", e)));
                js_bridge::destroy_chart(PIE_CHART_ID);
                js_bridge::destroy_chart(BAR_CHART_ID);
            }
        }
    });

    let page_style = format!(
        "min-height: 100vh; padding: 16px 24px; background-color: {}; color: {}; font-family: {};",
        theme::BACKGROUND,
        theme::TEXT,
        theme::FONT_FAMILY
    );
    let caption_style = format!("margin: 0 0 8px 0; color: {};", theme::MUTED_TEXT);
    let divider_style = format!("border: none; border-top: 1px solid {};", theme::BORDER);

    rsx! {
        div {
            style: "{page_style}",

            h1 { style: "margin: 0 0 4px 0;", "{APP_TITLE}" }
            p { style: "{caption_style}", "Carbon-Aware Logistics Dashboard" }

            ActionBar {}

            hr { style: "{divider_style}" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            div {
                style: "display: grid; grid-template-columns: 1.1fr 1.5fr 1.2fr; gap: 24px; align-items: start;",

                div {
                    InputsPanel {}
                    if let Some(report) = (state.report)() {
                        MetricSummary { report }
                    }
                }

                div {
                    if (state.report)().is_some() {
                        ChartHeader {
                            title: "Emission Share by Category (Pie – Optimized)".to_string(),
                            unit_description: "Share of optimized tons CO₂e per year".to_string(),
                        }
                        ChartContainer { id: PIE_CHART_ID.to_string(), min_height: 520 }
                    }
                }

                div {
                    if (state.report)().is_some() {
                        ChartHeader {
                            title: "Total Emissions – Baseline vs Optimized".to_string(),
                            unit_description: "Metric tons CO₂e per year".to_string(),
                        }
                        ChartContainer { id: BAR_CHART_ID.to_string(), min_height: 380 }
                    }
                }
            }

            if let Some(report) = (state.report)() {
                div {
                    style: "margin-top: 16px;",
                    ChartHeader {
                        title: "Breakdown by Category".to_string(),
                        unit_description: "Metric tons CO₂e per year".to_string(),
                    }
                    BreakdownTable { report }
                }
                AssumptionsNote {}
            }
        }
    }
}

/// Activity inputs, subcontractor totals and adjustment sliders.
#[component]
fn InputsPanel() -> Element {
    let activity_categories: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| c.is_factor_driven())
        .collect();

    rsx! {
        ChartHeader { title: "Inputs – Activity Data".to_string() }
        for category in activity_categories {
            ActivityField { category }
        }

        p { style: "font-weight: 600; margin: 12px 0 4px 0;", "Subcontractors – tons CO₂e/year" }
        for index in 0..MAX_SUBCONTRACTORS {
            SubcontractorField { index }
        }

        ChartHeader { title: "Adjustments – Sliders".to_string() }
        for lever in Lever::ALL {
            AdjustmentSlider { lever }
        }
    }
}
