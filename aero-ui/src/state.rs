//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use aero_aqi::client::{AqiClient, ClientConfig};
use aero_sync::selection::SelectionCoordinator;
use aero_sync::store::CityDataStore;
use aero_sync::view::{DashboardView, ViewTransition};
use dioxus::prelude::*;

/// City selected before the first dataset arrives.
pub const DEFAULT_CITY: &str = "Delhi";

/// Dashboard-wide settings, constructor-injected so tests can point the
/// client at a stub source.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub client: ClientConfig,
    /// Automatic dataset poll interval
    pub poll_interval_secs: u32,
    /// Minimum duration of the artificial loading phase between views
    pub transition_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            client: ClientConfig::default(),
            poll_interval_secs: 300,
            transition_ms: 900,
        }
    }
}

/// Shared application state for the AeroSense dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Authoritative city dataset with fallback degradation
    pub store: Signal<CityDataStore>,
    /// The single selected-city value plus search query state
    pub selection: Signal<SelectionCoordinator>,
    /// Navigation state machine
    pub view: Signal<ViewTransition>,
    /// Data API client
    pub client: Signal<AqiClient>,
    /// Settings the drivers read (poll interval, transition duration)
    pub config: Signal<DashboardConfig>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            store: Signal::new(CityDataStore::new()),
            selection: Signal::new(SelectionCoordinator::new(DEFAULT_CITY)),
            view: Signal::new(ViewTransition::new(DashboardView::Overview)),
            client: Signal::new(AqiClient::new(config.client.clone())),
            config: Signal::new(config),
        }
    }
}
