//! Message types for the application (TEA pattern)

use xpectro_core::{DomainStatus, FilterQuery, Protocol, TaskStatus, ViewId};

use crate::input_key::InputKey;

/// Filter query addressed to the list of one view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopedQuery {
    /// Task list of the active detection view
    Tasks(FilterQuery<TaskStatus>),
    /// Domain list of the domains view
    Domains(FilterQuery<DomainStatus>),
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Request to quit (may show confirmation)
    RequestQuit,
    /// Quit without confirmation (Ctrl+C, signal handler, headless)
    Quit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    Navigate(ViewId),
    /// Navigate by string id; unknown ids are ignored
    NavigateByName(String),
    /// Next/previous top-level view in dock order (login entry excluded)
    NextView,
    PrevView,
    SetSubTab(usize),
    NextSubTab,
    PrevSubTab,
    /// Activate the dock entry at this catalog index
    ActivateMenuEntry(usize),

    // ─────────────────────────────────────────────────────────
    // Session Messages
    // ─────────────────────────────────────────────────────────
    /// Mark the session authenticated (credentials are verified elsewhere)
    Login,
    Logout,
    /// Submit the login form: login, then open the dashboard
    SubmitLogin,
    ToggleTheme,
    ToggleProfilePanel,
    ToggleMobileMenu,
    SetHoveredDockItem(Option<ViewId>),
    HoverNext,
    HoverPrev,
    ActivateHovered,

    // ─────────────────────────────────────────────────────────
    // Domain Messages
    // ─────────────────────────────────────────────────────────
    AddDomain { url: String, protocol: Protocol },
    /// Add the domain typed into the add-domain form
    SubmitDomainDraft,
    RemoveDomain(u64),
    RemoveSelectedDomain,
    CycleProtocol,

    // ─────────────────────────────────────────────────────────
    // Filtering / Selection Messages
    // ─────────────────────────────────────────────────────────
    SetFilterQuery(ScopedQuery),
    /// Replace the search text of the active view's list
    SetSearchText(String),
    CycleStatusFilter,
    SelectNext,
    SelectPrev,
    /// Activate the selected item (dashboard stat card)
    ActivateSelection,
    TogglePricingPeriod,

    // ─────────────────────────────────────────────────────────
    // Text Input Messages
    // ─────────────────────────────────────────────────────────
    StartSearch,
    StartDomainInput,
    StartLoginInput,
    InputChar(char),
    InputBackspace,
    /// Finish the current input (submit forms, keep search text)
    InputCommit,
    /// Abort the current input (clears search text)
    InputCancel,
    /// Move between login form fields
    LoginFocusNext,
}
