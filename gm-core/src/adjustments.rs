use serde::{Deserialize, Serialize};

/// Lower bound of every adjustment slider.
pub const PCT_MIN: f64 = 0.0;
/// Upper bound of every adjustment slider.
pub const PCT_MAX: f64 = 100.0;

/// "What-if" reduction levers, all percentages in [0, 100].
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdjustmentParameters {
    /// Share of car kilometres driven electrically.
    pub ev_share_pct: f64,
    /// Cut applied to car kilometres.
    pub km_reduction_pct: f64,
    /// Cargo plane load factor; 100 reproduces the baseline.
    pub plane_load_pct: f64,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self::identity()
    }
}

impl AdjustmentParameters {
    /// Adjustments that leave the baseline untouched.
    pub fn identity() -> Self {
        Self {
            ev_share_pct: 0.0,
            km_reduction_pct: 0.0,
            plane_load_pct: 100.0,
        }
    }

    /// Slider positions of the sample session.
    pub fn sample() -> Self {
        Self {
            ev_share_pct: 20.0,
            km_reduction_pct: 5.0,
            plane_load_pct: 50.0,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Copy with every percentage clamped to the slider range. NaN becomes 0.
    pub fn clamped(&self) -> Self {
        let clamp = |pct: f64| pct.max(PCT_MIN).min(PCT_MAX);
        Self {
            ev_share_pct: clamp(self.ev_share_pct),
            km_reduction_pct: clamp(self.km_reduction_pct),
            plane_load_pct: clamp(self.plane_load_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let adjustments = AdjustmentParameters::default();
        assert!(adjustments.is_identity());
        assert_eq!(adjustments.plane_load_pct, 100.0);
        assert!(!AdjustmentParameters::sample().is_identity());
    }

    #[test]
    fn test_clamped() {
        let wild = AdjustmentParameters {
            ev_share_pct: 140.0,
            km_reduction_pct: -3.0,
            plane_load_pct: f64::NAN,
        };
        let clamped = wild.clamped();
        assert_eq!(clamped.ev_share_pct, 100.0);
        assert_eq!(clamped.km_reduction_pct, 0.0);
        assert_eq!(clamped.plane_load_pct, 0.0);
        assert_eq!(AdjustmentParameters::sample().clamped(), AdjustmentParameters::sample());
    }

    #[test]
    fn test_partial_json_keeps_identity_defaults() {
        let parsed: AdjustmentParameters = serde_json::from_str(r#"{"ev_share_pct": 30}"#).unwrap();
        assert_eq!(parsed.ev_share_pct, 30.0);
        assert_eq!(parsed.km_reduction_pct, 0.0);
        assert_eq!(parsed.plane_load_pct, 100.0);
    }
}
