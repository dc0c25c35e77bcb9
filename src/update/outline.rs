//! Outline and jump list update handlers

use crate::commands::Cmd;
use crate::messages::OutlineMsg;
use crate::model::EditorSession;

/// Handle outline and jump list activation
pub fn update_outline(session: &mut EditorSession, msg: OutlineMsg) -> Option<Cmd> {
    let line = match msg {
        OutlineMsg::ActivateItem(index) => session.nav.outline.get(index)?.line,
        OutlineMsg::ActivateJump(index) => session.nav.jump_list().get(index)?.line,
        OutlineMsg::JumpToLine(line) => line.max(1),
    };
    // The host reports the resulting cursor move, which updates highlights
    Some(Cmd::RevealLine { line })
}
