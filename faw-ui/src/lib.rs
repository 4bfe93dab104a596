//! Shared Dioxus components and D3.js bridge for the fraud awareness apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js/topojson choropleth via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals, including the readiness latch
//! - `viewport`: width probe for the responsive table layout
//! - `components`: reusable RSX components (nav menu, tables, detail card, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod viewport;
