//! xpectro-app - Application state and navigation for the Xpectro console
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`] owned by the runner, [`Message`]s describing every user
//! command, and [`handler::update`] applying them. On top of that it holds
//! the navigation controller, the access gate, the view registry, the
//! session state and configuration loading.

pub mod config;
pub mod gate;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod session;
pub mod state;
pub mod view_model;
pub mod views;

// Re-export primary types
pub use gate::{resolve_view, RenderTarget};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, ScopedQuery};
pub use navigation::{NavigationController, NavigationState};
pub use process::process_message;
pub use session::{SessionState, UiFlags};
pub use state::{AppPhase, AppState, UiMode};
pub use view_model::ViewModel;
pub use views::{catalog, EntryAction, MenuEntry, MenuIcon};
