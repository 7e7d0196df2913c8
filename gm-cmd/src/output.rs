//! Report rendering and output helpers shared by the subcommands.

use chrono::{DateTime, Local};
use clap::ValueEnum;
use gm_calc::report::EmissionReport;
use gm_core::factors::ASSUMPTIONS;
use gm_core::scenario::{Scenario, ScenarioFormat};
use gm_utils::format::{format_percent, format_tons};
use log::info;
use serde::Serialize;
use std::fmt::Write as _;

/// How `calculate` presents its results.
#[derive(ValueEnum, Debug, PartialEq, Clone, Copy)]
pub enum ReportFormat {
    /// Aligned text table with totals and assumptions
    Table,
    /// One row per category plus a total row
    Csv,
    /// Scenario and full report as JSON
    Json,
}

/// Scenario file layout for `sample`.
#[derive(ValueEnum, Debug, PartialEq, Clone, Copy)]
pub enum ScenarioFileFormat {
    Json,
    Csv,
}

impl From<ScenarioFileFormat> for ScenarioFormat {
    fn from(format: ScenarioFileFormat) -> Self {
        match format {
            ScenarioFileFormat::Json => ScenarioFormat::Json,
            ScenarioFileFormat::Csv => ScenarioFormat::Csv,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Local>,
    scenario: &'a Scenario,
    report: &'a EmissionReport,
}

pub fn render_report(
    scenario: &Scenario,
    report: &EmissionReport,
    format: ReportFormat,
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(report)),
        ReportFormat::Csv => render_csv(report),
        ReportFormat::Json => {
            let doc = JsonReport {
                generated_at: Local::now(),
                scenario,
                report,
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
    }
}

/// Text table in the layout of the dashboard's results panel.
pub fn render_table(report: &EmissionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>14} {:>14} {:>14}",
        "Category", "Baseline (t)", "Optimized (t)", "Reduction (t)"
    );
    let _ = writeln!(out, "{}", "-".repeat(65));
    for row in report.rows() {
        let _ = writeln!(
            out,
            "{:<20} {:>14} {:>14} {:>14}",
            row.name,
            format_tons(row.baseline),
            format_tons(row.optimized),
            format_tons(row.reduction)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Baseline total (tons CO2e):  {}", format_tons(report.baseline_total));
    let _ = writeln!(out, "Optimized total (tons CO2e): {}", format_tons(report.optimized_total));
    let _ = writeln!(out, "Reduction (tons):            {}", format_tons(report.reduction_tons));
    let _ = writeln!(out, "Percent reduction:           {}", format_percent(report.percent_reduction));
    let _ = writeln!(out);
    let _ = writeln!(out, "Assumptions: {}", ASSUMPTIONS);
    out
}

/// `category,name,baseline_tons,optimized_tons,reduction_tons` rows, ending with a `total` row.
pub fn render_csv(report: &EmissionReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["category", "name", "baseline_tons", "optimized_tons", "reduction_tons"])?;
    for row in report.rows() {
        wtr.write_record([
            row.category.key().to_string(),
            row.name.to_string(),
            row.baseline.to_string(),
            row.optimized.to_string(),
            row.reduction.to_string(),
        ])?;
    }
    wtr.write_record([
        "total".to_string(),
        "Total".to_string(),
        report.baseline_total.to_string(),
        report.optimized_total.to_string(),
        report.reduction_tons.to_string(),
    ])?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV report: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
            info!("Wrote {} bytes to {}", content.len(), path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
