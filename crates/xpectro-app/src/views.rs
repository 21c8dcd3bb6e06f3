//! View registry: the fixed menu catalog and per-view sub-tabs

use serde::Serialize;
use xpectro_core::ViewId;

use crate::message::Message;
use crate::session::SessionState;

const DETECTION_TABS: &[&str] = &["Detection", "Analytics"];
const VISHING_TABS: &[&str] = &["Detection Online", "Detection Offline", "Analytics"];
const SINGLE_TAB: &[&str] = &["Overview"];

/// Icon shown next to a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuIcon {
    Dashboard,
    ShieldAlert,
    Mic,
    PhoneOff,
    Globe,
    CreditCard,
    LogIn,
    LogOut,
}

/// Side effect run instead of navigating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryAction {
    /// Authenticated: drop the session and stay on the current view
    Logout,
    /// Unauthenticated: open the login view
    OpenLogin,
}

/// One entry of the navigation dock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: MenuIcon,
    pub action: Option<EntryAction>,
}

impl MenuEntry {
    /// Message that activating this entry dispatches
    pub fn activation(&self) -> Message {
        match self.action {
            Some(EntryAction::Logout) => Message::Logout,
            Some(EntryAction::OpenLogin) => Message::Navigate(ViewId::Login),
            None => Message::Navigate(self.id),
        }
    }
}

/// Menu catalog for the current session, in dock order.
///
/// Recomputed on every call; only the last entry depends on `session`.
pub fn catalog(session: &SessionState) -> Vec<MenuEntry> {
    let entry = |id, label, icon| MenuEntry {
        id,
        label,
        icon,
        action: None,
    };

    let auth_entry = if session.authenticated {
        MenuEntry {
            id: ViewId::Login,
            label: "Logout",
            icon: MenuIcon::LogOut,
            action: Some(EntryAction::Logout),
        }
    } else {
        MenuEntry {
            id: ViewId::Login,
            label: "Login",
            icon: MenuIcon::LogIn,
            action: Some(EntryAction::OpenLogin),
        }
    };

    vec![
        entry(ViewId::Dashboard, "Dashboard", MenuIcon::Dashboard),
        entry(ViewId::Smishing, "Smishing Detection", MenuIcon::ShieldAlert),
        entry(ViewId::FakeVoice, "Deepfake Audio", MenuIcon::Mic),
        entry(ViewId::Vishing, "Vishing Monitor", MenuIcon::PhoneOff),
        entry(ViewId::Domains, "Domain Security", MenuIcon::Globe),
        entry(ViewId::Pricing, "Pricing Plans", MenuIcon::CreditCard),
        auth_entry,
    ]
}

/// Check if `view` is a member of the catalog
pub fn contains(view: ViewId) -> bool {
    ViewId::ALL.contains(&view)
}

/// Sub-tab labels of a view. Views without sub-tabs have one implicit tab.
pub fn sub_tabs(view: ViewId) -> &'static [&'static str] {
    match view {
        ViewId::Smishing | ViewId::FakeVoice => DETECTION_TABS,
        ViewId::Vishing => VISHING_TABS,
        _ => SINGLE_TAB,
    }
}

/// Number of sub-tabs of a view (always at least 1)
pub fn sub_tab_count(view: ViewId) -> usize {
    sub_tabs(view).len()
}
