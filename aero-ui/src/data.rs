//! Async drivers tying the sync-layer state machines to the browser.
//!
//! The store and the view controller are sans-IO; everything that spawns,
//! sleeps, or cancels lives here.

use crate::state::AppState;
use aero_sync::view::DashboardView;
use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::info;

/// Issue a dataset refresh unless one is already in flight (coalesced, not
/// queued). Used for both the startup fetch and manual refreshes.
pub fn spawn_refresh(state: &AppState) {
    let mut store = state.store;
    if !store.write().begin_refresh() {
        return;
    }
    let client = state.client.peek().clone();
    spawn(async move {
        let result = client.fetch_cities().await;
        store.write().apply_refresh(result);
    });
}

/// Start the automatic poll loop. The returned task must be cancelled at
/// teardown so no timer outlives the dashboard session.
pub fn start_polling(state: &AppState) -> Task {
    let state = *state;
    let interval_ms = state.config.peek().poll_interval_secs.saturating_mul(1000);
    info!("Polling city dataset every {} ms", interval_ms);
    spawn(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            spawn_refresh(&state);
        }
    })
}

/// Request navigation to `target` and, if a transition actually starts, arm
/// the timed completion that ends the artificial loading phase.
pub fn request_view(state: &AppState, target: DashboardView) {
    let mut view = state.view;
    if !view.write().request(target) {
        return;
    }
    let delay_ms = state.config.peek().transition_ms;
    spawn(async move {
        TimeoutFuture::new(delay_ms).await;
        view.write().complete();
    });
}

/// Tear down the dashboard session: cancel the poll task and retire the
/// store so an airborne fetch result is discarded.
pub fn teardown(state: &AppState, poll_task: Option<Task>) {
    if let Some(task) = poll_task {
        task.cancel();
    }
    let mut store = state.store;
    store.write().retire();
    info!("Dashboard session torn down");
}
