//! Per-category baseline / optimized table.

use crate::theme;
use dioxus::prelude::*;
use gm_calc::report::EmissionReport;
use gm_utils::format::format_tons;

/// Table of every category in display order with a totals row.
#[component]
pub fn BreakdownTable(report: EmissionReport) -> Element {
    let rows = report.rows();
    let table_style = format!(
        "width: 100%; border-collapse: collapse; font-size: 13px; color: {};",
        theme::TEXT
    );
    let head_style = format!(
        "text-align: right; padding: 6px 8px; border-bottom: 1px solid {}; color: {};",
        theme::BORDER,
        theme::MUTED_TEXT
    );
    let cell_style = format!(
        "text-align: right; padding: 4px 8px; border-bottom: 1px solid {};",
        theme::BORDER
    );
    let name_style = format!("{} text-align: left;", cell_style);
    let total_style = format!("{} font-weight: 600;", cell_style);
    let total_name_style = format!("{} text-align: left;", total_style);

    rsx! {
        table {
            style: "{table_style}",
            thead {
                tr {
                    th { style: "{head_style} text-align: left;", "Category" }
                    th { style: "{head_style}", "Baseline (t)" }
                    th { style: "{head_style}", "Optimized (t)" }
                    th { style: "{head_style}", "Reduction (t)" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr {
                        key: "{row.name}",
                        td { style: "{name_style}", "{row.name}" }
                        td { style: "{cell_style}", {format_tons(row.baseline)} }
                        td { style: "{cell_style}", {format_tons(row.optimized)} }
                        td { style: "{cell_style}", {format_tons(row.reduction)} }
                    }
                }
                tr {
                    td { style: "{total_name_style}", "Total" }
                    td { style: "{total_style}", {format_tons(report.baseline_total)} }
                    td { style: "{total_style}", {format_tons(report.optimized_total)} }
                    td { style: "{total_style}", {format_tons(report.reduction_tons)} }
                }
            }
        }
    }
}
