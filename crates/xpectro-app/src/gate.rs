//! Access gate: decides what is rendered for a navigation state

use serde::Serialize;
use xpectro_core::ViewId;

use crate::navigation::NavigationState;
use crate::session::SessionState;

/// What the presentation layer should render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum RenderTarget {
    /// Locked terminal screen shown instead of a restricted view
    RestrictedPlaceholder,
    View { view: ViewId, sub_tab: usize },
}

/// Resolve the render target.
///
/// Unauthenticated sessions only ever see the login view; every other view
/// resolves to [`RenderTarget::RestrictedPlaceholder`]. `nav` is never
/// modified, so the requested view is shown as soon as the session logs in.
pub fn resolve_view(nav: &NavigationState, session: &SessionState) -> RenderTarget {
    if !session.authenticated && nav.active_view != ViewId::Login {
        return RenderTarget::RestrictedPlaceholder;
    }
    RenderTarget::View {
        view: nav.active_view,
        sub_tab: nav.active_sub_tab,
    }
}
