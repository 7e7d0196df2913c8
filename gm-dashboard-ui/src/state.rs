//! Per-session application state managed via Dioxus context.
//!
//! `AppState` bundles the session's inputs, slider positions and last
//! calculation result into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Nothing is global: every mounted app owns
//! its own signals.

use dioxus::prelude::*;
use gm_calc::report::EmissionReport;
use gm_core::adjustments::{AdjustmentParameters, PCT_MAX, PCT_MIN};
use gm_core::category::Category;
use gm_core::inputs::ActivityInputs;
use gm_core::scenario::Scenario;

/// One of the three adjustment sliders.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lever {
    EvShare,
    KmReduction,
    PlaneLoad,
}

impl Lever {
    pub const ALL: [Lever; 3] = [Lever::EvShare, Lever::KmReduction, Lever::PlaneLoad];

    pub fn label(self) -> &'static str {
        match self {
            Lever::EvShare => "EV Share for Cars (%)",
            Lever::KmReduction => "KM Reduction for Cars (%)",
            Lever::PlaneLoad => "Plane Load Factor (%)",
        }
    }

    pub fn get(self, adjustments: &AdjustmentParameters) -> f64 {
        match self {
            Lever::EvShare => adjustments.ev_share_pct,
            Lever::KmReduction => adjustments.km_reduction_pct,
            Lever::PlaneLoad => adjustments.plane_load_pct,
        }
    }

    pub fn set(self, adjustments: &mut AdjustmentParameters, pct: f64) {
        match self {
            Lever::EvShare => adjustments.ev_share_pct = pct,
            Lever::KmReduction => adjustments.km_reduction_pct = pct,
            Lever::PlaneLoad => adjustments.plane_load_pct = pct,
        }
    }
}

/// Form label for an activity field, e.g. "Cars – distance (km/year)".
pub fn activity_label(category: Category) -> &'static str {
    match category {
        Category::Cars => "Cars – distance (km/year)",
        Category::Trucks => "Trucks – distance (km/year)",
        Category::Buses => "Buses – distance (km/year)",
        Category::Forklifts => "Forklifts – hours/year",
        Category::Planes => "Cargo Planes – hours/year",
        Category::Lighting => "Office Lighting – kWh/year",
        Category::Heating => "Heating – kWh-th/year",
        Category::Cooling => "Cooling (A/C) – kWh/year",
        Category::Computing => "Computing (IT) – kWh/year",
        Category::Subcontractors => "Subcontractors – tons CO₂e/year",
    }
}

/// Parse a number field. Empty or malformed text yields `None`; negative
/// values are clamped to zero.
pub fn parse_non_negative(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.max(0.0))
}

/// Parse a slider value, clamped to the slider range.
pub fn parse_pct(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(PCT_MIN, PCT_MAX))
}

/// Shared state for one dashboard session.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Activity data being edited
    pub inputs: Signal<ActivityInputs>,
    /// Slider positions
    pub adjustments: Signal<AdjustmentParameters>,
    /// Result of the last "Calculate", cleared on any edit
    pub report: Signal<Option<EmissionReport>>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState pre-populated with the sample scenario.
    pub fn new() -> Self {
        let sample = Scenario::sample();
        Self {
            inputs: Signal::new(sample.inputs),
            adjustments: Signal::new(sample.adjustments),
            report: Signal::new(None),
            error_msg: Signal::new(None),
        }
    }

    /// Snapshot of the current inputs and slider positions.
    pub fn scenario(&self) -> Scenario {
        Scenario {
            inputs: self.inputs.read().clone(),
            adjustments: *self.adjustments.read(),
        }
    }

    fn replace(&mut self, scenario: Scenario) {
        self.inputs.set(scenario.inputs);
        self.adjustments.set(scenario.adjustments);
        self.clear_report();
    }

    pub fn load_sample(&mut self) {
        log::info!("Loading sample scenario");
        self.replace(Scenario::sample());
    }

    pub fn reset(&mut self) {
        log::info!("Resetting scenario");
        self.replace(Scenario::reset());
    }

    /// Compute a fresh report from the clamped session inputs.
    pub fn calculate(&mut self) {
        let scenario = self.scenario().clamped();
        let report = EmissionReport::from_scenario(&scenario);
        log::info!(
            "Calculated baseline {:.1} t, optimized {:.1} t",
            report.baseline_total,
            report.optimized_total
        );
        self.error_msg.set(None);
        self.report.set(Some(report));
    }

    pub fn set_activity(&mut self, category: Category, value: f64) {
        if let Some(slot) = self.inputs.write().activity_mut(category) {
            *slot = value;
        }
        self.clear_report();
    }

    pub fn set_subcontractor(&mut self, index: usize, tons: f64) {
        self.inputs.write().set_subcontractor(index, tons);
        self.clear_report();
    }

    pub fn set_lever(&mut self, lever: Lever, pct: f64) {
        lever.set(&mut self.adjustments.write(), pct);
        self.clear_report();
    }

    fn clear_report(&mut self) {
        if self.report.peek().is_some() {
            self.report.set(None);
        }
    }
}
