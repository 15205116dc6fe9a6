//! Live-data synchronization and cross-view selection coordination.
//!
//! This crate owns the dashboard's moving parts without touching the UI:
//! - `store`: the authoritative city dataset with fallback degradation
//! - `selection`: the single selected-city value shared by all input surfaces
//! - `search`: the pure city-name filter
//! - `view`: the navigation state machine with its artificial loading phase

pub mod search;
pub mod selection;
pub mod store;
pub mod view;
