//! The `factors` subcommand.

use gm_core::category::Category;
use gm_core::factors::{kg_per_unit, ASSUMPTIONS};
use std::fmt::Write as _;

/// Emission factor table followed by the assumptions note.
pub fn render_factors() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:>12}  {}", "Category", "kg CO2e", "per");
    let _ = writeln!(out, "{}", "-".repeat(42));
    for category in Category::ALL {
        match kg_per_unit(category) {
            Some(factor) => {
                let _ = writeln!(
                    out,
                    "{:<20} {:>12}  {}",
                    category.display_name(),
                    factor,
                    category.activity_unit()
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{:<20} {:>12}  (reported directly in {})",
                    category.display_name(),
                    "-",
                    category.activity_unit()
                );
            }
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", ASSUMPTIONS);
    out
}

pub fn run_factors() -> anyhow::Result<()> {
    print!("{}", render_factors());
    Ok(())
}
