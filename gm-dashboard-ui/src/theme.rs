//! Dark dashboard palette.

use gm_core::category::Category;

pub const BACKGROUND: &str = "#0e1117";
pub const PANEL: &str = "#1a1f25";
pub const BORDER: &str = "#2a313a";
pub const TEXT: &str = "#ffffff";
pub const MUTED_TEXT: &str = "#9aa4b2";
pub const ACCENT: &str = "#0bb28b";
pub const INFO_BACKGROUND: &str = "#10263a";
pub const INFO_TEXT: &str = "#8cc8ff";

pub const BASELINE_COLOR: &str = "#636efa";
pub const OPTIMIZED_COLOR: &str = "#0bb28b";

pub const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

/// Stable slice color per category so the pie keeps colors across recalculations.
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Cars => "#636efa",
        Category::Trucks => "#ef553b",
        Category::Buses => "#00cc96",
        Category::Forklifts => "#ab63fa",
        Category::Planes => "#ffa15a",
        Category::Lighting => "#19d3f3",
        Category::Heating => "#ff6692",
        Category::Cooling => "#b6e880",
        Category::Computing => "#ff97ff",
        Category::Subcontractors => "#fecb52",
    }
}

/// Style of the three header buttons.
pub fn button_style() -> String {
    format!(
        "background-color: {}; color: {}; border: none; border-radius: 8px; height: 2.5em; font-weight: 600; width: 100%; cursor: pointer;",
        ACCENT, TEXT
    )
}

/// Style of a dark card (metric, table or chart panel).
pub fn panel_style() -> String {
    format!(
        "background-color: {}; border: 1px solid {}; border-radius: 10px; padding: 10px;",
        PANEL, BORDER
    )
}
