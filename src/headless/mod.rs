//! Headless mode - NDJSON commands in, view snapshots out
//!
//! Drives the same state machine as the TUI without a terminal, so scripts
//! and tests can navigate the console and inspect what it would render.
//!
//! # Command Format
//!
//! One JSON object per stdin line, tagged by `cmd`:
//!
//! ```json
//! {"cmd":"navigate","view":"domains"}
//! {"cmd":"login"}
//! {"cmd":"add_domain","url":"portal.company.com","protocol":"http"}
//! ```
//!
//! # Event Format
//!
//! Events are output as NDJSON, one per line, tagged by `event`. Every
//! processed command produces exactly one `view` event; a malformed line
//! produces one `error` event in its place.
//!
//! ```json
//! {"event":"view","render":{"target":"restricted_placeholder"},...}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use xpectro_app::{AppState, MenuEntry, Message, RenderTarget, ViewModel};
use xpectro_core::prelude::*;
use xpectro_core::{Protocol, Theme, ViewId};

pub use runner::run_headless;

/// Commands accepted on stdin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HeadlessCommand {
    /// Navigate by view id; unknown ids are ignored
    Navigate { view: String },
    Login,
    Logout,
    ToggleTheme,
    SubTab { index: usize },
    AddDomain {
        url: String,
        #[serde(default)]
        protocol: Option<Protocol>,
    },
    RemoveDomain { id: u64 },
    Search { text: String },
    StatusFilter,
    TogglePricing,
    Quit,
}

impl HeadlessCommand {
    /// Translate into the message the TUI would dispatch
    pub fn into_message(self, default_protocol: Protocol) -> Message {
        match self {
            HeadlessCommand::Navigate { view } => Message::NavigateByName(view),
            HeadlessCommand::Login => Message::Login,
            HeadlessCommand::Logout => Message::Logout,
            HeadlessCommand::ToggleTheme => Message::ToggleTheme,
            HeadlessCommand::SubTab { index } => Message::SetSubTab(index),
            HeadlessCommand::AddDomain { url, protocol } => Message::AddDomain {
                url,
                protocol: protocol.unwrap_or(default_protocol),
            },
            HeadlessCommand::RemoveDomain { id } => Message::RemoveDomain(id),
            HeadlessCommand::Search { text } => Message::SetSearchText(text),
            HeadlessCommand::StatusFilter => Message::CycleStatusFilter,
            HeadlessCommand::TogglePricing => Message::TogglePricingPeriod,
            HeadlessCommand::Quit => Message::Quit,
        }
    }
}

/// Parse one stdin line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<HeadlessCommand>> {
    let trimmed = line.trim();
    match trimmed {
        "" => Ok(None),
        "q" | "quit" => Ok(Some(HeadlessCommand::Quit)),
        json => serde_json::from_str(json)
            .map(Some)
            .map_err(|e| Error::headless(format!("invalid command '{}': {}", json, e))),
    }
}

/// One stdin line as seen by the event loop, in input order
#[derive(Debug)]
pub enum HeadlessInput {
    Message(Message),
    /// A line that failed to parse; reported as an `error` event
    Invalid(Error),
}

impl From<Message> for HeadlessInput {
    fn from(msg: Message) -> Self {
        HeadlessInput::Message(msg)
    }
}

/// Parse one stdin line into loop input. Blank lines yield `None`.
pub fn parse_input(line: &str, default_protocol: Protocol) -> Option<HeadlessInput> {
    match parse_command(line) {
        Ok(Some(cmd)) => Some(HeadlessInput::Message(cmd.into_message(default_protocol))),
        Ok(None) => None,
        Err(e) => Some(HeadlessInput::Invalid(e)),
    }
}

/// Session part of a view snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub theme: Theme,
    pub active_view: ViewId,
    pub active_sub_tab: usize,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Console ready for commands
    Ready { version: &'static str, timestamp: i64 },

    /// What the console renders after a command
    View {
        render: RenderTarget,
        session: SessionSnapshot,
        model: ViewModel,
        catalog: Vec<MenuEntry>,
        timestamp: i64,
    },

    /// A command could not be parsed or processed
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// Console shut down
    Quit { timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready() -> Self {
        Self::Ready {
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Self::now(),
        }
    }

    pub fn view(state: &AppState) -> Self {
        let nav = state.navigation.current();
        Self::View {
            render: state.render_target(),
            session: SessionSnapshot {
                authenticated: state.session.authenticated,
                theme: state.session.theme,
                active_view: nav.active_view,
                active_sub_tab: nav.active_sub_tab,
            },
            model: state.view_model(),
            catalog: state.catalog(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn quit() -> Self {
        Self::Quit {
            timestamp: Self::now(),
        }
    }
}
