//! Navigation bar over the dashboard sub-views.

use crate::data;
use crate::state::AppState;
use aero_sync::view::DashboardView;
use dioxus::prelude::*;

/// One button per dashboard view. Requests go through the transition
/// controller, so navigating shows the loading phase; presses during a
/// transition are inert (first request wins).
#[component]
pub fn ViewNav() -> Element {
    let state = use_context::<AppState>();
    let transition = (state.view)();
    let active = transition.active();

    rsx! {
        nav {
            style: "display: flex; gap: 8px; flex-wrap: wrap; margin: 12px 0;",
            for (view, label, style) in DashboardView::ALL.map(|view| {
                let style = if view == active {
                    "padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer; background: #2c3e50; color: #fff;"
                } else {
                    "padding: 6px 14px; border: 1px solid #ccc; border-radius: 4px; cursor: pointer; background: #fff; color: #2c3e50;"
                };
                (view, view.label(), style)
            }) {
                button {
                    key: "{label}",
                    style: "{style}",
                    onclick: move |_| data::request_view(&state, view),
                    "{label}"
                }
            }
        }
    }
}
