//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: View and sub-tab transitions, dock activation
//! - `session`: Login/logout, theme and shell flags
//! - `domains`: Domain registry commands
//! - `filters`: Search/status filters, selection, per-view toggles
//! - `input`: Text input modes
//! - `keys`: Key event handlers for UI modes

pub(crate) mod domains;
pub(crate) mod filters;
pub(crate) mod input;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod session;
pub(crate) mod update;


use xpectro_core::ViewId;

use crate::gate::RenderTarget;
use crate::message::Message;
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// View currently rendered, or None behind the restricted placeholder
pub(crate) fn visible_view(state: &AppState) -> Option<ViewId> {
    match state.render_target() {
        RenderTarget::View { view, .. } => Some(view),
        RenderTarget::RestrictedPlaceholder => None,
    }
}
