use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Maximum number of subcontractor totals a session tracks.
pub const MAX_SUBCONTRACTORS: usize = 3;

/// Yearly activity data for one logistics operation.
///
/// Distances are in km, operating times in hours, energy in kWh (thermal kWh
/// for heating) and subcontractor values in metric tons CO2e. Values are
/// expected to be non-negative; use [`ActivityInputs::clamped`] on anything
/// typed in by a user.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActivityInputs {
    pub cars_km: f64,
    pub trucks_km: f64,
    pub buses_km: f64,
    pub forklifts_hr: f64,
    pub planes_hr: f64,
    pub lighting_kwh: f64,
    /// Thermal kWh
    pub heating_kwhth: f64,
    pub cooling_kwh: f64,
    pub computing_kwh: f64,
    /// Up to [`MAX_SUBCONTRACTORS`] values, already in tons CO2e.
    pub subcontractors_tons: Vec<f64>,
}

impl Default for ActivityInputs {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl ActivityInputs {
    /// All activity zero, three empty subcontractor slots.
    pub fn zeroed() -> Self {
        Self {
            cars_km: 0.0,
            trucks_km: 0.0,
            buses_km: 0.0,
            forklifts_hr: 0.0,
            planes_hr: 0.0,
            lighting_kwh: 0.0,
            heating_kwhth: 0.0,
            cooling_kwh: 0.0,
            computing_kwh: 0.0,
            subcontractors_tons: vec![0.0; MAX_SUBCONTRACTORS],
        }
    }

    /// The sample logistics operation used to pre-populate a new session.
    pub fn sample() -> Self {
        Self {
            cars_km: 180_000.0,
            trucks_km: 100_000.0,
            buses_km: 60_000.0,
            forklifts_hr: 1_500.0,
            planes_hr: 250.0,
            lighting_kwh: 90_000.0,
            heating_kwhth: 40_000.0,
            cooling_kwh: 220_000.0,
            computing_kwh: 60_000.0,
            subcontractors_tons: vec![120.0, 45.0, 30.0],
        }
    }

    /// Activity measure for a factor-driven category.
    ///
    /// Returns `None` for [`Category::Subcontractors`], which has no single
    /// activity measure; see [`ActivityInputs::subcontractors_total`].
    pub fn activity(&self, category: Category) -> Option<f64> {
        let value = match category {
            Category::Cars => self.cars_km,
            Category::Trucks => self.trucks_km,
            Category::Buses => self.buses_km,
            Category::Forklifts => self.forklifts_hr,
            Category::Planes => self.planes_hr,
            Category::Lighting => self.lighting_kwh,
            Category::Heating => self.heating_kwhth,
            Category::Cooling => self.cooling_kwh,
            Category::Computing => self.computing_kwh,
            Category::Subcontractors => return None,
        };
        Some(value)
    }

    /// Mutable access to the activity measure of a factor-driven category.
    pub fn activity_mut(&mut self, category: Category) -> Option<&mut f64> {
        let slot = match category {
            Category::Cars => &mut self.cars_km,
            Category::Trucks => &mut self.trucks_km,
            Category::Buses => &mut self.buses_km,
            Category::Forklifts => &mut self.forklifts_hr,
            Category::Planes => &mut self.planes_hr,
            Category::Lighting => &mut self.lighting_kwh,
            Category::Heating => &mut self.heating_kwhth,
            Category::Cooling => &mut self.cooling_kwh,
            Category::Computing => &mut self.computing_kwh,
            Category::Subcontractors => return None,
        };
        Some(slot)
    }

    /// Subcontractor value at `index`, or 0 for an unused slot.
    pub fn subcontractor(&self, index: usize) -> f64 {
        self.subcontractors_tons.get(index).copied().unwrap_or(0.0)
    }

    /// Set the subcontractor value at `index`, growing the list with zeros.
    ///
    /// Indices at or beyond [`MAX_SUBCONTRACTORS`] are ignored.
    pub fn set_subcontractor(&mut self, index: usize, tons: f64) {
        if index >= MAX_SUBCONTRACTORS {
            log::warn!(
                "Ignoring subcontractor #{}: at most {} are tracked",
                index + 1,
                MAX_SUBCONTRACTORS
            );
            return;
        }
        if self.subcontractors_tons.len() <= index {
            self.subcontractors_tons.resize(index + 1, 0.0);
        }
        self.subcontractors_tons[index] = tons;
    }

    /// Sum of all subcontractor values in tons CO2e.
    pub fn subcontractors_total(&self) -> f64 {
        self.subcontractors_tons.iter().sum()
    }

    /// Copy with every value clamped to be non-negative.
    ///
    /// NaN and infinities become 0 and the subcontractor list is cut to
    /// [`MAX_SUBCONTRACTORS`].
    pub fn clamped(&self) -> Self {
        let clamp = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
        let mut out = self.clone();
        for category in Category::ALL {
            if let Some(value) = out.activity_mut(category) {
                *value = clamp(*value);
            }
        }
        out.subcontractors_tons.truncate(MAX_SUBCONTRACTORS);
        for tons in out.subcontractors_tons.iter_mut() {
            *tons = clamp(*tons);
        }
        out
    }
}
