//! Reusable Dioxus RSX components for the Green Meter dashboard.

mod action_bar;
mod activity_field;
mod adjustment_slider;
mod assumptions_note;
mod breakdown_table;
mod chart_container;
mod chart_header;
mod error_display;
mod metric_card;

pub use action_bar::ActionBar;
pub use activity_field::{ActivityField, SubcontractorField};
pub use adjustment_slider::AdjustmentSlider;
pub use assumptions_note::AssumptionsNote;
pub use breakdown_table::BreakdownTable;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use metric_card::{MetricCard, MetricSummary};
