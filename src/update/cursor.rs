//! Cursor update handlers: highlight tracking and schema resolution

use crate::commands::Cmd;
use crate::messages::CursorMsg;
use crate::model::EditorSession;

use super::schema::docs_command;

/// Handle cursor messages
///
/// Reuses the last built outline; never triggers a rebuild.
pub fn update_cursor(session: &mut EditorSession, msg: CursorMsg) -> Option<Cmd> {
    match msg {
        CursorMsg::Moved { line, column, text } => {
            let mut cmds = Vec::new();

            if session.nav.set_cursor_line(line) {
                tracing::trace!(
                    "Cursor {}:{} active item {:?}",
                    line,
                    column,
                    session.nav.active_index
                );
                cmds.push(Cmd::Redraw);
            }

            if let Some(change) = session.schema.observe(&session.scanner, &text) {
                cmds.push(Cmd::PersistSchema {
                    name: change.name.clone(),
                });
                cmds.extend(docs_command(session, &change.name));
            }

            match cmds.len() {
                0 => None,
                1 => cmds.pop(),
                _ => Some(Cmd::batch(cmds)),
            }
        }
    }
}
