//! Shared utility functions for Green Meter crates.

/// Unit conversion helpers
pub mod units {
    /// Kilograms in one metric ton.
    pub const KG_PER_TON: f64 = 1000.0;

    /// Convert kilograms CO2e to metric tons CO2e.
    pub fn tons_from_kg(kg: f64) -> f64 {
        kg / KG_PER_TON
    }

    /// Convert a percentage (0-100) into a fraction (0-1).
    ///
    /// Values outside the range are passed through unchanged, so 150% becomes 1.5.
    pub fn fraction_from_pct(pct: f64) -> f64 {
        pct / 100.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_tons_from_kg() {
            assert_eq!(tons_from_kg(32_400.0), 32.4);
            assert_eq!(tons_from_kg(0.0), 0.0);
            assert_eq!(tons_from_kg(2_250_000.0), 2250.0);
        }

        #[test]
        fn test_fraction_from_pct() {
            assert_eq!(fraction_from_pct(100.0), 1.0);
            assert_eq!(fraction_from_pct(50.0), 0.5);
            assert_eq!(fraction_from_pct(0.0), 0.0);
            assert_eq!(fraction_from_pct(150.0), 1.5);
        }
    }
}

/// Number formatting for dashboard metrics and CLI tables
pub mod format {
    /// Format a value with thousands separators and a fixed number of decimals.
    ///
    /// e.g., `format_grouped(2802.8, 1)` -> "2,802.8"
    pub fn format_grouped(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (idx, ch) in int_part.chars().enumerate() {
            if idx > 0 && (int_part.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        // Avoid "-0.0" when a tiny negative value rounds to zero
        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };

        match frac_part {
            Some(frac) => format!("{}{}.{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Format metric tons CO2e the way the dashboard metrics show them: "1,671.9"
    pub fn format_tons(tons: f64) -> String {
        format_grouped(tons, 1)
    }

    /// Format a percentage with one decimal and a `%` suffix: "40.3%"
    pub fn format_percent(pct: f64) -> String {
        format!("{:.1}%", pct)
    }

}
