//! Emission factors in kilograms CO2e per unit of activity.
//!
//! These are fixed domain constants; nothing mutates them at runtime.

use crate::category::Category;

/// Cars, kg CO2e per km.
pub const CARS_KG_PER_KM: f64 = 0.18;
/// Trucks, kg CO2e per km.
pub const TRUCKS_KG_PER_KM: f64 = 0.90;
/// Buses, kg CO2e per km.
pub const BUSES_KG_PER_KM: f64 = 1.10;
/// Forklifts, kg CO2e per operating hour.
pub const FORKLIFTS_KG_PER_HOUR: f64 = 4.0;
/// Cargo planes, kg CO2e per flight hour.
pub const PLANES_KG_PER_HOUR: f64 = 9000.0;
/// Grid electricity (lighting, cooling, computing), kg CO2e per kWh.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.42;
/// Heating, kg CO2e per thermal kWh.
pub const HEATING_KG_PER_KWH_TH: f64 = 0.20;

/// Share of car emissions avoided per unit of EV adoption (EVs emit 70% less).
pub const EV_INTENSITY_REDUCTION: f64 = 0.70;

/// Assumptions note shown next to every calculation result.
pub const ASSUMPTIONS: &str = "Emission Factors: Cars 0.18 kg/km; Trucks 0.90 kg/km; \
Buses 1.10 kg/km; Forklifts 4.0 kg/hour; Cargo Planes 9,000 kg/hour; \
Electricity (Lighting/Cooling/Computing) 0.42 kg/kWh; Heating 0.20 kg/kWh-th. \
EV share = 70% less emissions; KM Reduction lowers car distance; \
Plane load factor scales aircraft linearly (100% = baseline).";

/// Emission factor for a category, or `None` for subcontractors which are
/// already reported in tons CO2e.
pub fn kg_per_unit(category: Category) -> Option<f64> {
    match category {
        Category::Cars => Some(CARS_KG_PER_KM),
        Category::Trucks => Some(TRUCKS_KG_PER_KM),
        Category::Buses => Some(BUSES_KG_PER_KM),
        Category::Forklifts => Some(FORKLIFTS_KG_PER_HOUR),
        Category::Planes => Some(PLANES_KG_PER_HOUR),
        Category::Lighting | Category::Cooling | Category::Computing => {
            Some(ELECTRICITY_KG_PER_KWH)
        }
        Category::Heating => Some(HEATING_KG_PER_KWH_TH),
        Category::Subcontractors => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_table() {
        assert_eq!(kg_per_unit(Category::Cars), Some(0.18));
        assert_eq!(kg_per_unit(Category::Trucks), Some(0.90));
        assert_eq!(kg_per_unit(Category::Buses), Some(1.10));
        assert_eq!(kg_per_unit(Category::Forklifts), Some(4.0));
        assert_eq!(kg_per_unit(Category::Planes), Some(9000.0));
        assert_eq!(kg_per_unit(Category::Lighting), Some(0.42));
        assert_eq!(kg_per_unit(Category::Heating), Some(0.20));
        assert_eq!(kg_per_unit(Category::Cooling), Some(0.42));
        assert_eq!(kg_per_unit(Category::Computing), Some(0.42));
        assert_eq!(kg_per_unit(Category::Subcontractors), None);
    }

    #[test]
    fn test_every_factor_driven_category_has_a_factor() {
        for category in Category::ALL {
            assert_eq!(kg_per_unit(category).is_some(), category.is_factor_driven());
        }
    }
}
