//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{domains, filters, input, keys::handle_key, navigation, session, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }
        Message::Quit | Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }
        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(view) => navigation::handle_navigate(state, view),
        Message::NavigateByName(id) => navigation::handle_navigate_by_name(state, &id),
        Message::NextView => navigation::handle_cycle_view(state, true),
        Message::PrevView => navigation::handle_cycle_view(state, false),
        Message::SetSubTab(index) => navigation::handle_set_sub_tab(state, index),
        Message::NextSubTab => {
            state.navigation.next_sub_tab();
            UpdateResult::none()
        }
        Message::PrevSubTab => {
            state.navigation.prev_sub_tab();
            UpdateResult::none()
        }
        Message::ActivateMenuEntry(index) => navigation::handle_activate_entry(state, index),

        // ─────────────────────────────────────────────────────────
        // Session Messages
        // ─────────────────────────────────────────────────────────
        Message::Login => session::handle_login(state),
        Message::Logout => session::handle_logout(state),
        Message::SubmitLogin => session::handle_submit_login(state),
        Message::ToggleTheme => {
            state.session.toggle_theme();
            UpdateResult::none()
        }
        Message::ToggleProfilePanel => {
            state.session.toggle_profile_panel();
            UpdateResult::none()
        }
        Message::ToggleMobileMenu => session::handle_toggle_mobile_menu(state),
        Message::SetHoveredDockItem(item) => {
            state.session.set_hovered_dock_item(item);
            UpdateResult::none()
        }
        Message::HoverNext => session::handle_hover_step(state, true),
        Message::HoverPrev => session::handle_hover_step(state, false),
        Message::ActivateHovered => navigation::handle_activate_hovered(state),

        // ─────────────────────────────────────────────────────────
        // Domain Messages
        // ─────────────────────────────────────────────────────────
        Message::AddDomain { url, protocol } => domains::handle_add_domain(state, &url, protocol),
        Message::SubmitDomainDraft => domains::handle_submit_draft(state),
        Message::RemoveDomain(id) => domains::handle_remove_domain(state, id),
        Message::RemoveSelectedDomain => domains::handle_remove_selected(state),
        Message::CycleProtocol => domains::handle_cycle_protocol(state),

        // ─────────────────────────────────────────────────────────
        // Filtering / Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SetFilterQuery(query) => filters::handle_set_filter_query(state, query),
        Message::SetSearchText(text) => filters::handle_set_search_text(state, text),
        Message::CycleStatusFilter => filters::handle_cycle_status_filter(state),
        Message::SelectNext => filters::handle_select_step(state, true),
        Message::SelectPrev => filters::handle_select_step(state, false),
        Message::ActivateSelection => filters::handle_activate_selection(state),
        Message::TogglePricingPeriod => filters::handle_toggle_pricing_period(state),

        // ─────────────────────────────────────────────────────────
        // Text Input Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => input::handle_start_search(state),
        Message::StartDomainInput => input::handle_start_domain_input(state),
        Message::StartLoginInput => input::handle_start_login_input(state),
        Message::InputChar(c) => input::handle_input_char(state, c),
        Message::InputBackspace => input::handle_input_backspace(state),
        Message::InputCommit => input::handle_input_commit(state),
        Message::InputCancel => input::handle_input_cancel(state),
        Message::LoginFocusNext => input::handle_login_focus_next(state),
    }
}
