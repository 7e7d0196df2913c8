//! A scenario is one session's worth of inputs: activity data plus the
//! adjustment sliders.
//!
//! Scenarios can be read from and written to two file formats:
//!
//! - JSON: `{"inputs": {...}, "adjustments": {...}}` using the
//!   [`ActivityInputs`] and [`AdjustmentParameters`] field names. Missing
//!   fields fall back to zero activity and identity adjustments.
//! - CSV: a `key,value` header followed by one row per field. Each
//!   `subcontractor` row appends one subcontractor total.

use crate::adjustments::AdjustmentParameters;
use crate::category::Category;
use crate::inputs::{ActivityInputs, MAX_SUBCONTRACTORS};
use anyhow::{anyhow, bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CSV key that appends one subcontractor value.
pub const SUBCONTRACTOR_KEY: &str = "subcontractor";

/// Supported scenario file formats.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ScenarioFormat {
    Json,
    Csv,
}

impl ScenarioFormat {
    /// Pick a format from a file extension (`.json` or `.csv`).
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(ScenarioFormat::Json),
            Some("csv") => Ok(ScenarioFormat::Csv),
            _ => bail!(
                "Cannot tell scenario format of {}: expected a .json or .csv extension",
                path.display()
            ),
        }
    }
}

/// Activity inputs and adjustments for one session.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub inputs: ActivityInputs,
    pub adjustments: AdjustmentParameters,
}

impl Scenario {
    /// The sample logistics operation with its sample slider positions.
    pub fn sample() -> Self {
        Self {
            inputs: ActivityInputs::sample(),
            adjustments: AdjustmentParameters::sample(),
        }
    }

    /// Zero activity, three zero subcontractors and identity adjustments.
    pub fn reset() -> Self {
        Self {
            inputs: ActivityInputs::zeroed(),
            adjustments: AdjustmentParameters::identity(),
        }
    }

    /// Copy with inputs clamped to >= 0 and adjustments to [0, 100].
    pub fn clamped(&self) -> Self {
        Self {
            inputs: self.inputs.clamped(),
            adjustments: self.adjustments.clamped(),
        }
    }

    /// Parse a JSON scenario.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let scenario: Scenario =
            serde_json::from_str(json).context("Failed to parse scenario JSON")?;
        if scenario.inputs.subcontractors_tons.len() > MAX_SUBCONTRACTORS {
            bail!(
                "Scenario lists {} subcontractors, at most {} are supported",
                scenario.inputs.subcontractors_tons.len(),
                MAX_SUBCONTRACTORS
            );
        }
        Ok(scenario)
    }

    /// Parse a `key,value` CSV scenario.
    pub fn from_csv_str(csv_object: &str) -> anyhow::Result<Self> {
        let mut scenario = Scenario::reset();
        scenario.inputs.subcontractors_tons.clear();

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());

        for (row_idx, row) in rdr.records().enumerate() {
            // Header is line 1
            let line = row_idx + 2;
            let record = row.with_context(|| format!("Failed to read scenario CSV line {}", line))?;
            let key = record
                .get(0)
                .ok_or_else(|| anyhow!("Missing key on scenario CSV line {}", line))?;
            let raw_value = record
                .get(1)
                .ok_or_else(|| anyhow!("Missing value for '{}' on line {}", key, line))?;
            let value = raw_value.parse::<f64>().with_context(|| {
                format!("Value '{}' for '{}' on line {} is not a number", raw_value, key, line)
            })?;
            scenario
                .apply_field(key, value)
                .with_context(|| format!("Invalid scenario CSV line {}", line))?;
        }

        Ok(scenario)
    }

    /// Set a single field by its serialized name.
    ///
    /// `subcontractor` appends to the subcontractor list; every other key
    /// overwrites the named activity or adjustment field.
    pub fn apply_field(&mut self, key: &str, value: f64) -> anyhow::Result<()> {
        if !value.is_finite() {
            bail!("Value {} for '{}' is not a finite number", value, key);
        }
        match key {
            SUBCONTRACTOR_KEY => {
                if self.inputs.subcontractors_tons.len() >= MAX_SUBCONTRACTORS {
                    bail!("At most {} subcontractors are supported", MAX_SUBCONTRACTORS);
                }
                self.inputs.subcontractors_tons.push(value);
            }
            "ev_share_pct" => self.adjustments.ev_share_pct = value,
            "km_reduction_pct" => self.adjustments.km_reduction_pct = value,
            "plane_load_pct" => self.adjustments.plane_load_pct = value,
            other => {
                let slot = match Category::from_field_name(other) {
                    Some(category) => self.inputs.activity_mut(category),
                    None => None,
                };
                let slot = slot.ok_or_else(|| anyhow!("Unknown scenario field '{}'", other))?;
                *slot = value;
            }
        }
        Ok(())
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scenario in the `key,value` CSV layout read by [`Scenario::from_csv_str`].
    pub fn to_csv_string(&self) -> anyhow::Result<String> {
        let mut wtr = WriterBuilder::new().from_writer(Vec::new());
        wtr.write_record(["key", "value"])?;
        for category in Category::ALL {
            if let Some(value) = self.inputs.activity(category) {
                wtr.write_record([category.field_name().to_string(), value.to_string()])?;
            }
        }
        for tons in &self.inputs.subcontractors_tons {
            wtr.write_record([SUBCONTRACTOR_KEY.to_string(), tons.to_string()])?;
        }
        let adjustments = [
            ("ev_share_pct", self.adjustments.ev_share_pct),
            ("km_reduction_pct", self.adjustments.km_reduction_pct),
            ("plane_load_pct", self.adjustments.plane_load_pct),
        ];
        for (key, value) in adjustments {
            wtr.write_record([key.to_string(), value.to_string()])?;
        }
        let bytes = wtr.into_inner().map_err(|e| anyhow!("Failed to flush scenario CSV: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn parse(data: &str, format: ScenarioFormat) -> anyhow::Result<Self> {
        match format {
            ScenarioFormat::Json => Self::from_json_str(data),
            ScenarioFormat::Csv => Self::from_csv_str(data),
        }
    }

    pub fn render(&self, format: ScenarioFormat) -> anyhow::Result<String> {
        match format {
            ScenarioFormat::Json => self.to_json_string(),
            ScenarioFormat::Csv => self.to_csv_string(),
        }
    }

    /// Load a scenario file, picking the format from its extension.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let format = ScenarioFormat::from_path(path)?;
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario = Self::parse(&data, format)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?;
        log::info!("Loaded {:?} scenario from {}", format, path.display());
        Ok(scenario)
    }
}
