//! Shared Dioxus components and D3.js bridge for the Green Meter dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `chart_data`: JSON payloads handed to the charts
//! - `state`: per-session AppState with Dioxus Signals
//! - `components`: reusable RSX components (inputs, sliders, metrics, tables)
//! - `theme`: the dark dashboard palette

pub mod chart_data;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
