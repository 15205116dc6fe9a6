//! AeroSense
//!
//! Live air-quality dashboard for 20 Indian cities: a Leaflet map, a city
//! dropdown, text search, and detail panels, fed by a periodically polled
//! data source that degrades to a built-in fallback dataset when the source
//! is unreachable.
//!
//! Data flow:
//! 1. On mount: one dataset refresh, then a poll every 5 minutes.
//! 2. Map markers, the dropdown, and search results all write the selected
//!    city through one coordinator.
//! 3. Navigation between sub-views passes through a short artificial
//!    loading phase driven by the view transition controller.

use aero_sync::view::DashboardView;
use aero_ui::components::{LoadingOverlay, SourceBadge, ViewNav};
use aero_ui::data;
use aero_ui::js_bridge;
use aero_ui::state::{AppState, DashboardConfig};
use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

mod views;

use views::{AboutView, AnalyticsView, CalculatorView, OverviewView, PredictorView, WeatherView};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting AeroSense dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aerosense-root"))
        .launch(App);
}

/// Default settings, with the data source base URL overridable at build
/// time so the app can run against a stub source.
fn dashboard_config() -> DashboardConfig {
    let mut config = DashboardConfig::default();
    if let Some(base_url) = option_env!("AEROSENSE_API_BASE") {
        config.client.base_url = base_url.to_string();
    }
    config
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(dashboard_config()));
    let mut poll_task = use_signal(|| None::<Task>);

    // Initial fetch + poll loop on mount
    use_effect(move || {
        js_bridge::init_map();
        data::spawn_refresh(&state);
        poll_task.set(Some(data::start_polling(&state)));
    });

    // Session teardown: stop polling, discard any airborne fetch result
    use_drop(move || {
        data::teardown(&state, poll_task.take());
    });

    let transition = (state.view)();
    let body = if transition.is_transitioning() {
        rsx! { LoadingOverlay {} }
    } else {
        match transition.active() {
            DashboardView::Overview => rsx! { OverviewView {} },
            DashboardView::Predictor => rsx! { PredictorView {} },
            DashboardView::Analytics => rsx! { AnalyticsView {} },
            DashboardView::Weather => rsx! { WeatherView {} },
            DashboardView::Calculator => rsx! { CalculatorView {} },
            DashboardView::About => rsx! { AboutView {} },
        }
    };

    rsx! {
        div {
            class: "container",
            style: "max-width: 1200px; margin: 0 auto; padding: 20px; font-family: sans-serif;",

            h1 {
                style: "text-align: center; color: #2c3e50; margin-bottom: 4px;",
                "AeroSense"
            }
            p {
                style: "text-align: center; color: #666; margin: 0 0 12px 0;",
                "Live air quality across Indian cities"
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap;",
                ViewNav {}
                SourceBadge {}
            }

            {body}
        }
    }
}
