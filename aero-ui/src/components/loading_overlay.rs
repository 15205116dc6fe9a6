//! Loading phase shown between view navigations.

use crate::state::AppState;
use dioxus::prelude::*;

/// Rendered while the view controller is in its transitioning state. The
/// minimum duration is armed by `data::request_view`, not here.
#[component]
pub fn LoadingOverlay() -> Element {
    let state = use_context::<AppState>();
    let target = state.view.read().target();
    let label = target.map(|view| view.label()).unwrap_or("view");

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 80px 0; color: #666;",
            "Loading {label}..."
        }
    }
}
