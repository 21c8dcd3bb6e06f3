//! Headless mode runner - main event loop without TUI

use std::io::Write;

use tokio::sync::mpsc;
use xpectro_app::{process_message, AppState, Message};
use xpectro_core::prelude::*;
use xpectro_core::Protocol;

use super::{parse_input, HeadlessEvent, HeadlessInput};

/// Run in headless mode - read NDJSON commands, write NDJSON events
pub async fn run_headless(state: AppState) -> Result<()> {
    info!("Xpectro console starting in HEADLESS mode");

    let mut state = state;
    let (input_tx, mut input_rx) = mpsc::channel::<HeadlessInput>(64);

    spawn_signal_forwarder(input_tx.clone());

    HeadlessEvent::ready().emit();

    // Reader starts after `ready`; every line, valid or not, goes through the channel
    let default_protocol = state.settings.domains.default_protocol;
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(input_tx, default_protocol);
    });

    let mut stdout = std::io::stdout();
    let result = headless_event_loop(&mut state, &mut input_rx, &mut stdout).await;

    HeadlessEvent::quit().emit();
    info!("Xpectro headless mode exiting");
    result
}

/// Feed SIGINT/SIGTERM quits into the input channel
fn spawn_signal_forwarder(input_tx: mpsc::Sender<HeadlessInput>) {
    let (signal_tx, mut signal_rx) = mpsc::channel::<Message>(1);
    xpectro_tui::signals::spawn_signal_handler(signal_tx);

    tokio::spawn(async move {
        while let Some(msg) = signal_rx.recv().await {
            if input_tx.send(msg.into()).await.is_err() {
                break;
            }
        }
    });
}

/// Process input until quit.
///
/// Writes the initial snapshot first, then one `view` event per message and
/// one `error` event per invalid line, in the order they were received.
pub async fn headless_event_loop<W: Write>(
    state: &mut AppState,
    input_rx: &mut mpsc::Receiver<HeadlessInput>,
    out: &mut W,
) -> Result<()> {
    HeadlessEvent::view(state)
        .write_to(out)
        .context("Failed to write initial view snapshot")?;

    while !state.should_quit() {
        match input_rx.recv().await {
            Some(HeadlessInput::Message(msg)) => {
                process_message(state, msg);
                HeadlessEvent::view(state)
                    .write_to(out)
                    .context("Failed to write view snapshot")?;
            }
            Some(HeadlessInput::Invalid(e)) => {
                warn!("Invalid stdin command: {}", e);
                HeadlessEvent::error(e.to_string(), e.is_fatal())
                    .write_to(out)
                    .context("Failed to write error event")?;
            }
            None => {
                info!("Input channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Read stdin commands on a blocking thread. EOF quits.
fn spawn_stdin_reader_blocking(input_tx: mpsc::Sender<HeadlessInput>, default_protocol: Protocol) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let Some(input) = parse_input(&line, default_protocol) else {
                    continue;
                };
                if input_tx.blocking_send(input).is_err() {
                    // Loop already stopped
                    return;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin closed, quitting");
    let _ = input_tx.blocking_send(Message::Quit.into());
}
