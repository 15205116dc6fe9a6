//! Passive data-provenance indicator.

use crate::state::AppState;
use aero_sync::store::DataSource;
use dioxus::prelude::*;

/// "data source: live/fallback" badge with the last fetch time. This is the
/// only surface a failed fetch ever reaches; it is never a blocking dialog.
#[component]
pub fn SourceBadge() -> Element {
    let state = use_context::<AppState>();
    let store = state.store.read();

    if !store.has_loaded() {
        return rsx! {
            div {
                style: "display: inline-block; padding: 4px 10px; margin: 8px 0; border-radius: 12px; font-size: 12px; background: #eceff1; color: #607d8b;",
                "Loading data..."
            }
        };
    }

    let source = store.source();
    let source_label = source.label();
    let updated = store
        .last_updated()
        .map(|t| t.format("%H:%M:%S UTC").to_string())
        .unwrap_or_default();
    let (background, color) = match source {
        DataSource::Live => ("#e8f5e9", "#2e7d32"),
        DataSource::Fallback => ("#fff8e1", "#b26a00"),
    };

    rsx! {
        div {
            style: "display: inline-block; padding: 4px 10px; margin: 8px 0; border-radius: 12px; font-size: 12px; background: {background}; color: {color};",
            "Data source: {source_label} | updated {updated}"
        }
    }
}
