//! Session state: authentication flag, theme and transient UI flags
//!
//! These mutators are the only writers of [`SessionState`]. Each is safe to
//! call repeatedly; calling `login()` while authenticated changes nothing.

use serde::Serialize;
use tracing::{debug, info};
use xpectro_core::{Theme, ViewId};

/// Per-process session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub authenticated: bool,
    pub theme: Theme,
    /// Transient shell flags
    pub ui: UiFlags,
}

/// Transient shell flags that do not affect access control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiFlags {
    pub profile_panel_open: bool,
    pub mobile_menu_open: bool,
    pub hovered_dock_item: Option<ViewId>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Theme::Dark)
    }
}

impl SessionState {
    /// Fresh, unauthenticated session with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            authenticated: false,
            theme,
            ui: UiFlags::default(),
        }
    }

    pub fn login(&mut self) {
        if !self.authenticated {
            info!("Session authenticated");
        }
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        if self.authenticated {
            info!("Session logged out");
        }
        self.authenticated = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {:?}", self.theme);
    }

    pub fn toggle_profile_panel(&mut self) {
        self.ui.profile_panel_open = !self.ui.profile_panel_open;
    }

    pub fn close_profile_panel(&mut self) {
        self.ui.profile_panel_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.ui.mobile_menu_open = !self.ui.mobile_menu_open;
        if !self.ui.mobile_menu_open {
            self.ui.hovered_dock_item = None;
        }
    }

    pub fn set_hovered_dock_item(&mut self, item: Option<ViewId>) {
        self.ui.hovered_dock_item = item;
    }
}
