//! Navigation controller: active view and active sub-tab

use serde::Serialize;
use tracing::debug;
use xpectro_core::ViewId;

use crate::views;

/// Logical navigation position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub active_view: ViewId,
    /// Always a valid index into `views::sub_tabs(active_view)`
    pub active_sub_tab: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_view: ViewId::Dashboard,
            active_sub_tab: 0,
        }
    }
}

/// Owns the [`NavigationState`] and applies transitions in call order.
///
/// Does not look at authentication; rendering decisions belong to the
/// access gate.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new(start: ViewId) -> Self {
        Self {
            state: NavigationState {
                active_view: start,
                active_sub_tab: 0,
            },
        }
    }

    /// Switch to `target` and reset the sub-tab.
    ///
    /// Returns false (state unchanged) if `target` is not in the catalog.
    pub fn navigate(&mut self, target: ViewId) -> bool {
        if !views::contains(target) {
            debug!("navigate: {} is not in the catalog", target);
            return false;
        }
        self.state = NavigationState {
            active_view: target,
            active_sub_tab: 0,
        };
        true
    }

    /// Navigate by string id. Unknown ids leave the state unchanged.
    pub fn navigate_by_name(&mut self, id: &str) -> bool {
        match ViewId::from_id(id) {
            Some(target) => self.navigate(target),
            None => {
                debug!("navigate: unknown view id {:?}", id);
                false
            }
        }
    }

    /// Select a sub-tab of the active view, clamped to the last valid index.
    /// Returns the index actually selected.
    pub fn set_sub_tab(&mut self, index: usize) -> usize {
        let last = views::sub_tab_count(self.state.active_view).saturating_sub(1);
        if index > last {
            debug!("set_sub_tab: {} out of range, clamping to {}", index, last);
        }
        self.state.active_sub_tab = index.min(last);
        self.state.active_sub_tab
    }

    pub fn next_sub_tab(&mut self) -> usize {
        self.set_sub_tab(self.state.active_sub_tab + 1)
    }

    pub fn prev_sub_tab(&mut self) -> usize {
        self.set_sub_tab(self.state.active_sub_tab.saturating_sub(1))
    }

    pub fn current(&self) -> NavigationState {
        self.state
    }

    pub fn active_view(&self) -> ViewId {
        self.state.active_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let nav = NavigationController::default();
        assert_eq!(nav.current(), NavigationState::default());
        assert_eq!(nav.active_view(), ViewId::Dashboard);
    }

    #[test]
    fn test_navigate_resets_sub_tab() {
        let mut nav = NavigationController::default();
        nav.navigate(ViewId::Vishing);
        nav.set_sub_tab(2);
        assert_eq!(nav.current().active_sub_tab, 2);

        assert!(nav.navigate(ViewId::Smishing));
        assert_eq!(
            nav.current(),
            NavigationState {
                active_view: ViewId::Smishing,
                active_sub_tab: 0
            }
        );
    }

    #[test]
    fn test_navigate_to_same_view_resets_sub_tab() {
        let mut nav = NavigationController::new(ViewId::Smishing);
        nav.set_sub_tab(1);
        nav.navigate(ViewId::Smishing);
        assert_eq!(nav.current().active_sub_tab, 0);
    }

    #[test]
    fn test_unknown_name_leaves_state_unchanged() {
        let mut nav = NavigationController::new(ViewId::Vishing);
        nav.set_sub_tab(1);
        let before = nav.current();

        for bogus in ["settings", "", "dash board", "admin", "DASHBOARD", " domains "] {
            assert!(!nav.navigate_by_name(bogus));
            assert_eq!(nav.current(), before);
        }
    }

    #[test]
    fn test_navigate_by_name_known_id() {
        let mut nav = NavigationController::default();
        assert!(nav.navigate_by_name("fakevoice"));
        assert_eq!(nav.active_view(), ViewId::FakeVoice);
    }

    #[test]
    fn test_set_sub_tab_clamps_to_last() {
        let mut nav = NavigationController::new(ViewId::Smishing);
        assert_eq!(nav.set_sub_tab(5), 1);
        assert_eq!(nav.current().active_sub_tab, 1);
    }

    #[test]
    fn test_single_tab_view_stays_at_zero() {
        let mut nav = NavigationController::new(ViewId::Pricing);
        assert_eq!(nav.set_sub_tab(3), 0);
        assert_eq!(nav.next_sub_tab(), 0);
    }

    #[test]
    fn test_next_prev_sub_tab_saturate() {
        let mut nav = NavigationController::new(ViewId::Vishing);
        assert_eq!(nav.prev_sub_tab(), 0);
        assert_eq!(nav.next_sub_tab(), 1);
        assert_eq!(nav.next_sub_tab(), 2);
        assert_eq!(nav.next_sub_tab(), 2);
        assert_eq!(nav.prev_sub_tab(), 1);
    }

    #[test]
    fn test_sequential_navigations_apply_in_order() {
        let mut nav = NavigationController::default();
        nav.navigate(ViewId::Domains);
        nav.navigate(ViewId::Pricing);
        assert_eq!(nav.active_view(), ViewId::Pricing);
    }
}
