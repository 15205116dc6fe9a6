//! Shared Dioxus components and Leaflet bridge for the AeroSense dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `data`: Refresh, polling, and view-transition drivers
//! - `components`: Reusable RSX components (selector, search box, panels)

pub mod components;
pub mod data;
pub mod js_bridge;
pub mod state;
