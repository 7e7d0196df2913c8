//! Scenario assembly and the `calculate` / `sample` subcommands.

use crate::output::{render_report, write_output, ReportFormat, ScenarioFileFormat};
use anyhow::bail;
use clap::Args;
use gm_calc::report::EmissionReport;
use gm_core::inputs::MAX_SUBCONTRACTORS;
use gm_core::scenario::{Scenario, ScenarioFormat};
use log::{debug, info};
use std::path::Path;

/// Per-field overrides applied on top of the base scenario.
#[derive(Args, Debug, Default, PartialEq)]
pub struct ScenarioOverrides {
    /// Cars, distance in km/year
    #[arg(long, allow_negative_numbers = true)]
    pub cars_km: Option<f64>,
    /// Trucks, distance in km/year
    #[arg(long, allow_negative_numbers = true)]
    pub trucks_km: Option<f64>,
    /// Buses, distance in km/year
    #[arg(long, allow_negative_numbers = true)]
    pub buses_km: Option<f64>,
    /// Forklifts, operating hours/year
    #[arg(long, allow_negative_numbers = true)]
    pub forklifts_hr: Option<f64>,
    /// Cargo planes, flight hours/year
    #[arg(long, allow_negative_numbers = true)]
    pub planes_hr: Option<f64>,
    /// Office lighting, kWh/year
    #[arg(long, allow_negative_numbers = true)]
    pub lighting_kwh: Option<f64>,
    /// Heating, thermal kWh/year
    #[arg(long, allow_negative_numbers = true)]
    pub heating_kwhth: Option<f64>,
    /// Cooling (A/C), kWh/year
    #[arg(long, allow_negative_numbers = true)]
    pub cooling_kwh: Option<f64>,
    /// Computing (IT), kWh/year
    #[arg(long, allow_negative_numbers = true)]
    pub computing_kwh: Option<f64>,
    /// Subcontractor total in tons CO2e/year; repeat up to three times to replace the list
    #[arg(long = "subcontractor", allow_negative_numbers = true)]
    pub subcontractors: Vec<f64>,
    /// EV share for cars (%)
    #[arg(long, allow_negative_numbers = true)]
    pub ev_share: Option<f64>,
    /// KM reduction for cars (%)
    #[arg(long, allow_negative_numbers = true)]
    pub km_reduction: Option<f64>,
    /// Plane load factor (%)
    #[arg(long, allow_negative_numbers = true)]
    pub plane_load: Option<f64>,
}

impl ScenarioOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn reject_non_finite(&self) -> anyhow::Result<()> {
        let named = [
            ("--cars-km", self.cars_km),
            ("--trucks-km", self.trucks_km),
            ("--buses-km", self.buses_km),
            ("--forklifts-hr", self.forklifts_hr),
            ("--planes-hr", self.planes_hr),
            ("--lighting-kwh", self.lighting_kwh),
            ("--heating-kwhth", self.heating_kwhth),
            ("--cooling-kwh", self.cooling_kwh),
            ("--computing-kwh", self.computing_kwh),
            ("--ev-share", self.ev_share),
            ("--km-reduction", self.km_reduction),
            ("--plane-load", self.plane_load),
        ];
        for (flag, value) in named {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                bail!("{} must be a finite number, got {}", flag, value);
            }
        }
        if let Some(value) = self.subcontractors.iter().find(|v| !v.is_finite()) {
            bail!("--subcontractor must be a finite number, got {}", value);
        }
        Ok(())
    }

    /// Overwrite every field that was given on the command line.
    pub fn apply(&self, scenario: &mut Scenario) -> anyhow::Result<()> {
        self.reject_non_finite()?;
        let inputs = &mut scenario.inputs;
        let fields = [
            (&mut inputs.cars_km, self.cars_km),
            (&mut inputs.trucks_km, self.trucks_km),
            (&mut inputs.buses_km, self.buses_km),
            (&mut inputs.forklifts_hr, self.forklifts_hr),
            (&mut inputs.planes_hr, self.planes_hr),
            (&mut inputs.lighting_kwh, self.lighting_kwh),
            (&mut inputs.heating_kwhth, self.heating_kwhth),
            (&mut inputs.cooling_kwh, self.cooling_kwh),
            (&mut inputs.computing_kwh, self.computing_kwh),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if !self.subcontractors.is_empty() {
            if self.subcontractors.len() > MAX_SUBCONTRACTORS {
                bail!(
                    "Got {} --subcontractor values, at most {} are supported",
                    self.subcontractors.len(),
                    MAX_SUBCONTRACTORS
                );
            }
            inputs.subcontractors_tons = self.subcontractors.clone();
        }

        let adjustments = &mut scenario.adjustments;
        if let Some(pct) = self.ev_share {
            adjustments.ev_share_pct = pct;
        }
        if let Some(pct) = self.km_reduction {
            adjustments.km_reduction_pct = pct;
        }
        if let Some(pct) = self.plane_load {
            adjustments.plane_load_pct = pct;
        }
        Ok(())
    }
}

/// Pick the base scenario, apply overrides and clamp to the input ranges.
pub fn build_scenario(
    scenario_path: Option<&str>,
    reset: bool,
    overrides: &ScenarioOverrides,
) -> anyhow::Result<Scenario> {
    let mut scenario = match scenario_path {
        Some(path) => Scenario::load(Path::new(path))?,
        None if reset => Scenario::reset(),
        None => Scenario::sample(),
    };
    overrides.apply(&mut scenario)?;

    let clamped = scenario.clamped();
    if clamped != scenario {
        info!("Clamped out-of-range inputs to their allowed ranges");
    }
    debug!("Scenario: {:?}", clamped);
    Ok(clamped)
}

pub fn run_calculate(
    scenario_path: Option<&str>,
    reset: bool,
    overrides: &ScenarioOverrides,
    format: ReportFormat,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let scenario = build_scenario(scenario_path, reset, overrides)?;
    let report = EmissionReport::from_scenario(&scenario);
    info!(
        "Baseline {:.1} t CO2e, optimized {:.1} t CO2e",
        report.baseline_total, report.optimized_total
    );
    let rendered = render_report(&scenario, &report, format)?;
    write_output(output, &rendered)
}

pub fn run_sample(format: ScenarioFileFormat, output: Option<&str>) -> anyhow::Result<()> {
    let rendered = Scenario::sample().render(ScenarioFormat::from(format))?;
    write_output(output, &rendered)
}
