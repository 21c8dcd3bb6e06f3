//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;
use xpectro_app::{process_message, AppState, Message};
use xpectro_core::prelude::*;

use super::{event, render, signals, terminal};

/// Run the interactive console until the user quits
pub async fn run(state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = state;

    // Unified channel for messages coming from outside the key loop
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    info!(
        "Console started on {} (authenticated: {})",
        state.active_view(),
        state.session.authenticated
    );
    let result = run_loop(&mut term, &mut state, msg_rx);

    ratatui::restore();
    info!("Console stopped");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
