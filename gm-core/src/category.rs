use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// An emission category reported by the dashboard.
///
/// The variant order is the fixed display order used by tables, charts and
/// serialized breakdowns. Nine categories are driven by an emission factor;
/// `Subcontractors` is reported directly in metric tons CO2e.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cars,
    Trucks,
    Buses,
    Forklifts,
    Planes,
    Lighting,
    Heating,
    Cooling,
    Computing,
    Subcontractors,
}

impl Category {
    /// Number of categories in every breakdown.
    pub const COUNT: usize = 10;

    /// All categories in display order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Cars,
        Category::Trucks,
        Category::Buses,
        Category::Forklifts,
        Category::Planes,
        Category::Lighting,
        Category::Heating,
        Category::Cooling,
        Category::Computing,
        Category::Subcontractors,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase key (e.g., "cars", "subcontractors").
    pub fn key(self) -> &'static str {
        match self {
            Category::Cars => "cars",
            Category::Trucks => "trucks",
            Category::Buses => "buses",
            Category::Forklifts => "forklifts",
            Category::Planes => "planes",
            Category::Lighting => "lighting",
            Category::Heating => "heating",
            Category::Cooling => "cooling",
            Category::Computing => "computing",
            Category::Subcontractors => "subcontractors",
        }
    }

    /// Human-readable name for tables and chart legends.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Cars => "Cars",
            Category::Trucks => "Trucks",
            Category::Buses => "Buses",
            Category::Forklifts => "Forklifts",
            Category::Planes => "Cargo Planes",
            Category::Lighting => "Office Lighting",
            Category::Heating => "Heating (Thermal)",
            Category::Cooling => "Cooling (A/C)",
            Category::Computing => "Computing (IT)",
            Category::Subcontractors => "Subcontractors",
        }
    }

    /// Unit of the activity measure the emission factor applies to.
    pub fn activity_unit(self) -> &'static str {
        match self {
            Category::Cars | Category::Trucks | Category::Buses => "km",
            Category::Forklifts | Category::Planes => "hour",
            Category::Heating => "kWh-th",
            Category::Lighting | Category::Cooling | Category::Computing => "kWh",
            Category::Subcontractors => "t CO2e",
        }
    }

    /// Field name of the matching [`ActivityInputs`](crate::inputs::ActivityInputs) member.
    pub fn field_name(self) -> &'static str {
        match self {
            Category::Cars => "cars_km",
            Category::Trucks => "trucks_km",
            Category::Buses => "buses_km",
            Category::Forklifts => "forklifts_hr",
            Category::Planes => "planes_hr",
            Category::Lighting => "lighting_kwh",
            Category::Heating => "heating_kwhth",
            Category::Cooling => "cooling_kwh",
            Category::Computing => "computing_kwh",
            Category::Subcontractors => "subcontractors_tons",
        }
    }

    /// Look up a category by its `ActivityInputs` field name.
    pub fn from_field_name(field: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.field_name() == field)
    }

    /// Whether this category is computed from an activity measure and factor.
    pub fn is_factor_driven(self) -> bool {
        self != Category::Subcontractors
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string does not name a category.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown emission category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn test_display_order_matches_index() {
        for (idx, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), idx);
        }
        assert_eq!(Category::ALL.first(), Some(&Category::Cars));
        assert_eq!(Category::ALL.last(), Some(&Category::Subcontractors));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!("planes".parse::<Category>().unwrap(), Category::Planes);
        assert_eq!(" Heating ".parse::<Category>().unwrap(), Category::Heating);
        assert!("boats".parse::<Category>().is_err());
    }

    #[test]
    fn test_field_name_lookup() {
        for category in Category::ALL {
            assert_eq!(Category::from_field_name(category.field_name()), Some(category));
        }
        assert_eq!(Category::from_field_name("planes_km"), None);
    }

    #[test]
    fn test_only_subcontractors_skip_factors() {
        let factor_driven = Category::ALL.iter().filter(|c| c.is_factor_driven()).count();
        assert_eq!(factor_driven, 9);
        assert!(!Category::Subcontractors.is_factor_driven());
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Category::Planes).unwrap();
        assert_eq!(json, "\"planes\"");
        let parsed: Category = serde_json::from_str("\"subcontractors\"").unwrap();
        assert_eq!(parsed, Category::Subcontractors);
    }
}
