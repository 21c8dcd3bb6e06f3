use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use xpectro_app::{process_message, InputKey, Message};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(180, 36);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_startup_renders_placeholder() {
    let state = create_test_state();
    let term = draw(&state);

    assert!(term.buffer_contains("ACCESS RESTRICTED"));
    assert!(term.buffer_contains("Dashboard"));
    assert!(term.buffer_contains("Login"));
    assert!(!term.buffer_contains("1,240"));
}

#[test]
fn test_gated_view_never_leaks_data() {
    let mut state = create_test_state();
    process_message(&mut state, Message::Navigate(ViewId::Domains));
    let term = draw(&state);

    assert!(term.buffer_contains("Domain Security"));
    assert!(!term.buffer_contains("finance.xpectro.com"));
}

#[test]
fn test_login_then_dashboard() {
    let mut state = create_test_state();
    process_message(&mut state, Message::Login);
    let term = draw(&state);

    assert!(term.buffer_contains("1,240"));
    assert!(term.buffer_contains("Logout"));
    assert!(!term.buffer_contains("ACCESS RESTRICTED"));
}

#[test]
fn test_logout_returns_to_placeholder() {
    let mut state = create_test_state();
    process_message(&mut state, Message::Login);
    process_message(&mut state, Message::Navigate(ViewId::Pricing));
    process_message(&mut state, Message::Logout);
    let term = draw(&state);

    assert!(term.buffer_contains("ACCESS RESTRICTED"));
    assert!(term.buffer_contains("Pricing Plans"));
    assert!(!term.buffer_contains("$10"));
}

#[test]
fn test_confirm_quit_dialog_overlay() {
    let mut state = create_test_state();
    state.settings.behavior.confirm_quit = true;
    process_message(&mut state, Message::Login);
    process_message(&mut state, Message::Key(InputKey::Char('q')));
    let term = draw(&state);

    assert!(term.buffer_contains("End the secure session and quit?"));
}

#[test]
fn test_profile_panel_overlay() {
    let mut state = create_test_state();
    process_message(&mut state, Message::Login);
    process_message(&mut state, Message::ToggleProfilePanel);
    let term = draw(&state);

    assert!(term.buffer_contains("Enterprise Admin"));
}

#[test]
fn test_hints_can_be_hidden() {
    let mut state = create_test_state();
    let term = draw(&state);
    assert!(term.buffer_contains("initiate sequence"));

    state.settings.ui.show_hints = false;
    let term = draw(&state);
    assert!(!term.buffer_contains("initiate sequence"));
}

#[test]
fn test_light_theme_renders() {
    let mut state = create_test_state();
    process_message(&mut state, Message::ToggleTheme);
    let term = draw(&state);
    assert!(term.buffer_contains("Light"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = create_test_state();
    process_message(&mut state, Message::Login);
    for target in ViewId::ALL {
        process_message(&mut state, Message::Navigate(target));
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, &state));
    }
}
