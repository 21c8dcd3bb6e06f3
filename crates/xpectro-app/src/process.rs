//! Message processing through the TEA update loop

use tracing::trace;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Run `message` and every follow-up message it produces to completion.
///
/// The caller re-reads `AppState::view_model()` afterwards; nothing here
/// renders.
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        trace!("update: {:?}", m);
        msg = handler::update(state, m).message;
    }
}
