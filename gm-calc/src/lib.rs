//! Emission calculations for logistics activity data.
//!
//! Everything here is pure: inputs in, breakdowns and totals out. The
//! presentation layer owns the session state and calls in once per
//! calculation request.
//!
//! ```rust
//! use gm_calc::report::EmissionReport;
//! use gm_core::scenario::Scenario;
//!
//! let report = EmissionReport::from_scenario(&Scenario::sample());
//! assert!((report.baseline_total - 2802.8).abs() < 1e-9);
//! assert!(report.optimized_total < report.baseline_total);
//! ```

/// Baseline and optimized breakdowns plus their aggregates
pub mod calculator {
    use gm_core::adjustments::AdjustmentParameters;
    use gm_core::breakdown::EmissionBreakdown;
    use gm_core::category::Category;
    use gm_core::factors::{self, CARS_KG_PER_KM, EV_INTENSITY_REDUCTION, PLANES_KG_PER_HOUR};
    use gm_core::inputs::ActivityInputs;
    use gm_utils::units::{fraction_from_pct, tons_from_kg};

    /// Emissions straight from the activity data, in metric tons CO2e.
    ///
    /// Factor-driven categories use `(measure * factor) / 1000`; subcontractors
    /// are the sum of the reported tons. Inputs are not validated, so negative
    /// activity yields negative tons.
    pub fn compute_baseline(inputs: &ActivityInputs) -> EmissionBreakdown {
        let mut breakdown = EmissionBreakdown::zeroed();
        for category in Category::ALL {
            let tons = match (inputs.activity(category), factors::kg_per_unit(category)) {
                (Some(measure), Some(factor)) => tons_from_kg(measure * factor),
                _ => inputs.subcontractors_total(),
            };
            breakdown.set(category, tons);
        }
        breakdown
    }

    /// Baseline with the adjustment levers applied to cars and planes.
    ///
    /// Cars: distance is cut by `km_reduction_pct`, then the EV share lowers
    /// intensity by [`EV_INTENSITY_REDUCTION`] per unit of share. Planes scale
    /// linearly with `plane_load_pct`. Percentages outside [0, 100] extrapolate.
    ///
    /// With identity adjustments the result is bit-for-bit the baseline.
    pub fn compute_optimized(
        inputs: &ActivityInputs,
        adjustments: &AdjustmentParameters,
    ) -> EmissionBreakdown {
        let mut breakdown = compute_baseline(inputs);

        let effective_km = inputs.cars_km * (1.0 - fraction_from_pct(adjustments.km_reduction_pct));
        let intensity = 1.0 - EV_INTENSITY_REDUCTION * fraction_from_pct(adjustments.ev_share_pct);
        breakdown.set(
            Category::Cars,
            tons_from_kg(effective_km * CARS_KG_PER_KM * intensity),
        );

        let load = fraction_from_pct(adjustments.plane_load_pct);
        breakdown.set(
            Category::Planes,
            tons_from_kg(inputs.planes_hr * PLANES_KG_PER_HOUR * load),
        );

        breakdown
    }

    /// Sum over all ten categories.
    pub fn total(breakdown: &EmissionBreakdown) -> f64 {
        breakdown.values().iter().sum()
    }

    /// Percentage of the baseline removed by the optimization; 0 for a zero baseline.
    pub fn percent_reduction(baseline_total: f64, optimized_total: f64) -> f64 {
        if baseline_total == 0.0 {
            return 0.0;
        }
        (baseline_total - optimized_total) / baseline_total * 100.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        const EPS: f64 = 1e-9;

        fn sample() -> (ActivityInputs, AdjustmentParameters) {
            (ActivityInputs::sample(), AdjustmentParameters::sample())
        }

        #[test]
        fn test_sample_baseline() {
            let (inputs, _) = sample();
            let baseline = compute_baseline(&inputs);
            assert!((baseline[Category::Cars] - 32.4).abs() < EPS);
            assert!((baseline[Category::Trucks] - 90.0).abs() < EPS);
            assert!((baseline[Category::Buses] - 66.0).abs() < EPS);
            assert!((baseline[Category::Forklifts] - 6.0).abs() < EPS);
            assert_eq!(baseline[Category::Planes], 2250.0);
            assert!((baseline[Category::Lighting] - 37.8).abs() < EPS);
            assert!((baseline[Category::Heating] - 8.0).abs() < EPS);
            assert!((baseline[Category::Cooling] - 92.4).abs() < EPS);
            assert!((baseline[Category::Computing] - 25.2).abs() < EPS);
            assert_eq!(baseline[Category::Subcontractors], 195.0);
            assert!((total(&baseline) - 2802.8).abs() < EPS);
        }

        #[test]
        fn test_sample_optimized() {
            let (inputs, adjustments) = sample();
            let optimized = compute_optimized(&inputs, &adjustments);
            // 171,000 km * 0.18 kg/km * 0.86 intensity
            assert!((optimized[Category::Cars] - 26.4708).abs() < EPS);
            assert_eq!(optimized[Category::Planes], 1125.0);
            assert_eq!(optimized[Category::Subcontractors], 195.0);
            assert!((total(&optimized) - 1671.8708).abs() < EPS);
        }

        #[test]
        fn test_only_cars_and_planes_change() {
            let (inputs, adjustments) = sample();
            let baseline = compute_baseline(&inputs);
            let optimized = compute_optimized(&inputs, &adjustments);
            for category in Category::ALL {
                if category != Category::Cars && category != Category::Planes {
                    assert_eq!(optimized[category], baseline[category], "{}", category);
                }
            }
        }

        /// Deterministic spread of activity data: every field gets an odd
        /// value, magnitudes range from 0.01 to 1e6 and the subcontractor
        /// list varies from empty to full.
        fn varied_inputs() -> Vec<ActivityInputs> {
            (0..48u64)
                .map(|seed| {
                    let scale = 10f64.powi((seed % 9) as i32 - 2);
                    let value = |field: u64| {
                        let mixed = (seed * 7_919 + field * 104_729) % 1_000_003;
                        (mixed as f64 / 997.0 + 0.013 * field as f64) * scale
                    };
                    ActivityInputs {
                        cars_km: value(1),
                        trucks_km: value(2),
                        buses_km: value(3),
                        forklifts_hr: value(4),
                        planes_hr: value(5),
                        lighting_kwh: value(6),
                        heating_kwhth: value(7),
                        cooling_kwh: value(8),
                        computing_kwh: value(9),
                        subcontractors_tons: (0..seed % 4).map(|i| value(10 + i)).collect(),
                    }
                })
                .collect()
        }

        #[test]
        fn test_identity_adjustments_reproduce_baseline_exactly() {
            let identity = AdjustmentParameters::identity();
            let mut odd = ActivityInputs::sample();
            odd.cars_km = 123_456.789;
            odd.planes_hr = 0.1 + 0.2;
            odd.subcontractors_tons = vec![0.3];
            let fixed = [ActivityInputs::sample(), ActivityInputs::zeroed(), odd];
            for inputs in fixed.into_iter().chain(varied_inputs()) {
                let baseline = compute_baseline(&inputs);
                let optimized = compute_optimized(&inputs, &identity);
                for category in Category::ALL {
                    assert_eq!(
                        optimized[category].to_bits(),
                        baseline[category].to_bits(),
                        "{} differs for {:?}",
                        category,
                        inputs
                    );
                }
            }
        }

        #[test]
        fn test_non_negative_inputs_give_non_negative_baseline() {
            let fixed = [ActivityInputs::sample(), ActivityInputs::zeroed()];
            for inputs in fixed.into_iter().chain(varied_inputs()) {
                for (category, tons) in compute_baseline(&inputs).iter() {
                    assert!(tons >= 0.0, "{} was {}", category, tons);
                }
            }
        }

        #[test]
        fn test_negative_inputs_propagate() {
            let mut inputs = ActivityInputs::zeroed();
            inputs.trucks_km = -1000.0;
            assert!((compute_baseline(&inputs)[Category::Trucks] + 0.9).abs() < EPS);
        }

        #[test]
        fn test_monotonic_levers() {
            // The lever under test sweeps 0..=100 in 2.5 steps while the other
            // two sit at uneven positions.
            let others = [(0.0, 100.0), (37.5, 12.25), (99.9, 0.1), (3.3, 66.6)];
            let mut all_inputs = varied_inputs();
            all_inputs.push(ActivityInputs::sample());
            for inputs in &all_inputs {
                for (a, b) in others {
                    let mut last_cars_ev = f64::INFINITY;
                    let mut last_cars_km = f64::INFINITY;
                    let mut last_planes = f64::NEG_INFINITY;
                    for step in 0..=40 {
                        let pct = step as f64 * 2.5;
                        let ev = AdjustmentParameters {
                            ev_share_pct: pct,
                            km_reduction_pct: a,
                            plane_load_pct: b,
                        };
                        let km = AdjustmentParameters {
                            ev_share_pct: a,
                            km_reduction_pct: pct,
                            plane_load_pct: b,
                        };
                        let load = AdjustmentParameters {
                            ev_share_pct: a,
                            km_reduction_pct: b,
                            plane_load_pct: pct,
                        };

                        let cars_ev = compute_optimized(inputs, &ev)[Category::Cars];
                        let cars_km = compute_optimized(inputs, &km)[Category::Cars];
                        let planes = compute_optimized(inputs, &load)[Category::Planes];

                        assert!(cars_ev <= last_cars_ev, "ev {} on {:?}", pct, inputs);
                        assert!(cars_km <= last_cars_km, "km {} on {:?}", pct, inputs);
                        assert!(planes >= last_planes, "load {} on {:?}", pct, inputs);
                        last_cars_ev = cars_ev;
                        last_cars_km = cars_km;
                        last_planes = planes;
                    }
                }
            }
            // Full reduction removes all car distance
            let inputs = ActivityInputs::sample();
            let gone = AdjustmentParameters { km_reduction_pct: 100.0, ..AdjustmentParameters::identity() };
            assert_eq!(compute_optimized(&inputs, &gone)[Category::Cars], 0.0);
        }

        #[test]
        fn test_out_of_range_adjustments_extrapolate() {
            let inputs = ActivityInputs::sample();
            let overloaded = AdjustmentParameters { plane_load_pct: 200.0, ..AdjustmentParameters::identity() };
            assert_eq!(compute_optimized(&inputs, &overloaded)[Category::Planes], 4500.0);
        }

        #[test]
        fn test_doubling_distance_doubles_cars() {
            let mut inputs = ActivityInputs::sample();
            let single = compute_baseline(&inputs)[Category::Cars];
            inputs.cars_km *= 2.0;
            let double = compute_baseline(&inputs)[Category::Cars];
            assert!((double - 2.0 * single).abs() < EPS);
        }

        #[test]
        fn test_percent_reduction() {
            assert_eq!(percent_reduction(0.0, 0.0), 0.0);
            assert_eq!(percent_reduction(0.0, 10.0), 0.0);
            assert_eq!(percent_reduction(200.0, 150.0), 25.0);
            assert_eq!(percent_reduction(100.0, 100.0), 0.0);
        }
    }
}

/// Calculation results bundled for display
pub mod report {
    use crate::calculator::{compute_baseline, compute_optimized, percent_reduction, total};
    use gm_core::adjustments::AdjustmentParameters;
    use gm_core::breakdown::EmissionBreakdown;
    use gm_core::category::Category;
    use gm_core::inputs::ActivityInputs;
    use gm_core::scenario::Scenario;
    use serde::Serialize;

    /// One category's baseline and optimized emissions, in tons CO2e.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct CategoryRow {
        pub category: Category,
        /// Display name, e.g. "Cargo Planes".
        pub name: &'static str,
        pub baseline: f64,
        pub optimized: f64,
        /// `baseline - optimized`
        pub reduction: f64,
    }

    /// Everything a presentation layer shows after "Calculate".
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct EmissionReport {
        pub baseline: EmissionBreakdown,
        pub optimized: EmissionBreakdown,
        pub baseline_total: f64,
        pub optimized_total: f64,
        /// `baseline_total - optimized_total`, in tons CO2e.
        pub reduction_tons: f64,
        pub percent_reduction: f64,
    }

    impl EmissionReport {
        pub fn calculate(inputs: &ActivityInputs, adjustments: &AdjustmentParameters) -> Self {
            let baseline = compute_baseline(inputs);
            let optimized = compute_optimized(inputs, adjustments);
            let baseline_total = total(&baseline);
            let optimized_total = total(&optimized);
            log::debug!(
                "Calculated emissions: baseline {:.3} t, optimized {:.3} t",
                baseline_total,
                optimized_total
            );
            Self {
                baseline,
                optimized,
                baseline_total,
                optimized_total,
                reduction_tons: baseline_total - optimized_total,
                percent_reduction: percent_reduction(baseline_total, optimized_total),
            }
        }

        pub fn from_scenario(scenario: &Scenario) -> Self {
            Self::calculate(&scenario.inputs, &scenario.adjustments)
        }

        /// Per-category rows in display order.
        pub fn rows(&self) -> Vec<CategoryRow> {
            Category::ALL
                .into_iter()
                .map(|category| {
                    let baseline = self.baseline[category];
                    let optimized = self.optimized[category];
                    CategoryRow {
                        category,
                        name: category.display_name(),
                        baseline,
                        optimized,
                        reduction: baseline - optimized,
                    }
                })
                .collect()
        }

        /// Rows that get a slice in the optimized share pie chart.
        pub fn pie_slices(&self) -> Vec<CategoryRow> {
            self.rows().into_iter().filter(|r| r.optimized > 0.0).collect()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_sample_report() {
            let report = EmissionReport::from_scenario(&Scenario::sample());
            assert!((report.baseline_total - 2802.8).abs() < 1e-9);
            assert!((report.optimized_total - 1671.8708).abs() < 1e-9);
            assert!((report.reduction_tons - 1130.9292).abs() < 1e-9);
            assert!((report.percent_reduction - 40.35).abs() < 0.01);
        }

        #[test]
        fn test_reset_report_is_all_zero() {
            let report = EmissionReport::from_scenario(&Scenario::reset());
            assert_eq!(report.baseline_total, 0.0);
            assert_eq!(report.optimized_total, 0.0);
            assert_eq!(report.percent_reduction, 0.0);
            assert!(report.pie_slices().is_empty());
        }

        #[test]
        fn test_rows_follow_display_order() {
            let report = EmissionReport::from_scenario(&Scenario::sample());
            let rows = report.rows();
            assert_eq!(rows.len(), Category::COUNT);
            assert_eq!(rows[4].name, "Cargo Planes");
            assert_eq!(rows[4].reduction, 1125.0);
            assert_eq!(rows[9].category, Category::Subcontractors);
            assert_eq!(rows[9].reduction, 0.0);
        }

        #[test]
        fn test_pie_skips_zero_categories() {
            let mut scenario = Scenario::sample();
            scenario.inputs.buses_km = 0.0;
            scenario.adjustments.plane_load_pct = 0.0;
            let report = EmissionReport::from_scenario(&scenario);
            let slices: Vec<Category> = report.pie_slices().iter().map(|r| r.category).collect();
            assert_eq!(slices.len(), 8);
            assert!(!slices.contains(&Category::Buses));
            assert!(!slices.contains(&Category::Planes));
        }

        #[test]
        fn test_report_serializes_breakdowns_by_key() {
            let report = EmissionReport::from_scenario(&Scenario::sample());
            let value = serde_json::to_value(&report).unwrap();
            assert_eq!(value["baseline"]["planes"], 2250.0);
            assert_eq!(value["optimized"]["planes"], 1125.0);
            assert_eq!(value["baseline"]["subcontractors"], 195.0);
        }
    }
}
