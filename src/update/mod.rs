//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. They never touch
//! the host, storage or documentation surface directly; side effects are
//! returned as [`Cmd`] values for the runtime to execute.

mod cursor;
mod document;
mod outline;
mod schema;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorSession;
use crate::scheduler::Timers;

pub use cursor::update_cursor;
pub use document::update_document;
pub use outline::update_outline;
pub use schema::{docs_command, update_schema};

/// Main update function - dispatches to sub-handlers
pub fn update(session: &mut EditorSession, timers: &mut dyn Timers, msg: Msg) -> Option<Cmd> {
    tracing::trace!("update: {:?}", msg);
    match msg {
        Msg::Document(m) => document::update_document(session, timers, m),
        Msg::Cursor(m) => cursor::update_cursor(session, m),
        Msg::Outline(m) => outline::update_outline(session, m),
        Msg::Scheduler(m) => document::update_scheduler(session, m),
        Msg::Schema(m) => schema::update_schema(session, m),
    }
}
