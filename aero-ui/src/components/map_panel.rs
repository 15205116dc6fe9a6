//! Leaflet map panel showing one marker per city.

use crate::js_bridge::{self, MAP_CONTAINER_ID};
use crate::state::AppState;
use dioxus::prelude::*;

/// Container div for the Leaflet map plus the effects that keep its markers
/// in sync with the dataset and the selection. Marker clicks write through
/// the shared `select` like every other input surface.
#[component]
pub fn MapPanel() -> Element {
    let state = use_context::<AppState>();

    // One-time: wire marker clicks back into the selection coordinator.
    use_effect(move || {
        let mut selection = state.selection;
        js_bridge::register_marker_click(move |name| {
            selection.write().select(&name);
        });
    });

    // Re-render markers whenever the dataset or the selection changes.
    use_effect(move || {
        let store = state.store.read();
        let selected = state.selection.read().current().to_string();
        js_bridge::render_markers(MAP_CONTAINER_ID, store.cities(), &selected);
    });

    use_drop(js_bridge::destroy_map);

    rsx! {
        div {
            id: "{MAP_CONTAINER_ID}",
            style: "height: 420px; width: 100%; border-radius: 6px; background: #eef2f5;",
        }
    }
}
