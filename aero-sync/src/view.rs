//! Navigation state machine for the dashboard sub-views.
//!
//! Navigations pass through an artificial loading phase: `request` moves to
//! `Transitioning` and the presentation layer arms a timer that calls
//! `complete` once the minimum duration has elapsed. The duration itself is
//! owned by the presentation layer, not by this controller.

use std::fmt;

/// The dashboard sub-views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardView {
    Overview,
    Predictor,
    Analytics,
    Weather,
    Calculator,
    About,
}

impl DashboardView {
    pub const ALL: [DashboardView; 6] = [
        DashboardView::Overview,
        DashboardView::Predictor,
        DashboardView::Analytics,
        DashboardView::Weather,
        DashboardView::Calculator,
        DashboardView::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::Predictor => "Predictor",
            DashboardView::Analytics => "Analytics",
            DashboardView::Weather => "Weather",
            DashboardView::Calculator => "Calculator",
            DashboardView::About => "About",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation state: settled on a view, or in the loading phase between two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTransition {
    Idle {
        active: DashboardView,
    },
    Transitioning {
        active: DashboardView,
        target: DashboardView,
    },
}

impl ViewTransition {
    pub fn new(default_view: DashboardView) -> Self {
        ViewTransition::Idle {
            active: default_view,
        }
    }

    /// The view currently rendered (the outgoing one while transitioning).
    pub fn active(&self) -> DashboardView {
        match *self {
            ViewTransition::Idle { active } => active,
            ViewTransition::Transitioning { active, .. } => active,
        }
    }

    /// The pending target while transitioning.
    pub fn target(&self) -> Option<DashboardView> {
        match *self {
            ViewTransition::Idle { .. } => None,
            ViewTransition::Transitioning { target, .. } => Some(target),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, ViewTransition::Transitioning { .. })
    }

    /// Request navigation to `target`.
    ///
    /// Returns `true` when a transition starts, which is the caller's signal
    /// to arm the timed completion. Requesting the active view is a no-op,
    /// and a request arriving mid-transition is ignored: the first request
    /// wins, so exactly one completion is armed per transition.
    pub fn request(&mut self, target: DashboardView) -> bool {
        match *self {
            ViewTransition::Idle { active } if active == target => false,
            ViewTransition::Idle { active } => {
                *self = ViewTransition::Transitioning { active, target };
                true
            }
            ViewTransition::Transitioning { .. } => false,
        }
    }

    /// Finish the loading phase; the pending target becomes active.
    ///
    /// A stray call while `Idle` is a silent no-op.
    pub fn complete(&mut self) {
        if let ViewTransition::Transitioning { target, .. } = *self {
            *self = ViewTransition::Idle { active: target };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardView, ViewTransition};

    #[test]
    fn test_request_enters_loading_phase() {
        let mut view = ViewTransition::new(DashboardView::Overview);
        assert!(view.request(DashboardView::Analytics));
        assert_eq!(
            view,
            ViewTransition::Transitioning {
                active: DashboardView::Overview,
                target: DashboardView::Analytics,
            }
        );
        assert_eq!(view.active(), DashboardView::Overview);
        assert_eq!(view.target(), Some(DashboardView::Analytics));
    }

    #[test]
    fn test_request_active_view_is_noop() {
        let mut view = ViewTransition::new(DashboardView::Overview);
        assert!(!view.request(DashboardView::Overview));
        assert_eq!(view, ViewTransition::new(DashboardView::Overview));
    }

    #[test]
    fn test_first_request_wins_while_transitioning() {
        let mut view = ViewTransition::new(DashboardView::Overview);
        assert!(view.request(DashboardView::Analytics));
        // A second request mid-transition does not alter the pending target.
        assert!(!view.request(DashboardView::Overview));
        assert_eq!(view.target(), Some(DashboardView::Analytics));
    }

    #[test]
    fn test_complete_activates_target() {
        let mut view = ViewTransition::new(DashboardView::Overview);
        view.request(DashboardView::Analytics);
        view.complete();
        assert_eq!(
            view,
            ViewTransition::Idle {
                active: DashboardView::Analytics,
            }
        );
    }

    #[test]
    fn test_stray_complete_is_noop() {
        let mut view = ViewTransition::new(DashboardView::Overview);
        view.request(DashboardView::Analytics);
        view.complete();
        let settled = view;
        view.complete();
        assert_eq!(view, settled);
    }
}
