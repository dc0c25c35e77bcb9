//! Document update handlers: debounced rebuilds and document replacement

use crate::commands::Cmd;
use crate::messages::{DocumentMsg, SchedulerMsg};
use crate::model::{Document, EditorSession, NavigationState};
use crate::scheduler::Timers;

/// Handle document content messages
pub fn update_document(
    session: &mut EditorSession,
    timers: &mut dyn Timers,
    msg: DocumentMsg,
) -> Option<Cmd> {
    match msg {
        DocumentMsg::ContentChanged => {
            let revision = session.document.mark_changed();
            let timer = session.scheduler.on_edit(timers);
            tracing::debug!(
                "Content changed: rev={} rebuild timer {:?} ({}ms)",
                revision,
                timer,
                session.scheduler.delay().as_millis()
            );
            None
        }

        DocumentMsg::SnapshotRead { revision, text } => {
            // Skip if the document has been edited since the read was requested
            if session.document.revision != revision {
                tracing::debug!(
                    "Discarding stale snapshot: doc revision {} != read revision {}",
                    session.document.revision,
                    revision
                );
                return None;
            }

            session.document.set_snapshot(&text, revision);
            session.rebuild();
            Some(Cmd::Redraw)
        }

        DocumentMsg::Replaced { text } => {
            session.scheduler.cancel(timers);
            let file_path = session.document.file_path.take();
            session.document = Document {
                file_path,
                ..Document::with_text(&text)
            };
            session.nav = NavigationState::default();
            session.schema.clear();
            session.rebuild();
            tracing::debug!("Document replaced: {} lines", session.document.line_count());
            Some(Cmd::Redraw)
        }
    }
}

/// Handle debounce timer messages
pub fn update_scheduler(session: &mut EditorSession, msg: SchedulerMsg) -> Option<Cmd> {
    match msg {
        SchedulerMsg::TimerFired(id) => {
            if !session.scheduler.on_timer_fired(id) {
                return None;
            }
            Some(Cmd::ReadDocument {
                revision: session.document.revision,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::scheduler::ManualTimers;
    use std::time::Duration;

    fn session(text: &str) -> EditorSession {
        EditorSession::new(text, EditorConfig::default())
    }

    #[test]
    fn test_content_changed_schedules_without_rebuilding() {
        let mut session = session("a = 1");
        let mut timers = ManualTimers::new();

        let cmd = update_document(&mut session, &mut timers, DocumentMsg::ContentChanged);
        assert!(cmd.is_none());
        assert_eq!(session.document.revision, 1);
        assert!(session.scheduler.pending().is_some());
        assert_eq!(timers.pending_count(), 1);
    }

    #[test]
    fn test_timer_fired_requests_read_at_current_revision() {
        let mut session = session("a = 1");
        let mut timers = ManualTimers::new();
        update_document(&mut session, &mut timers, DocumentMsg::ContentChanged);
        update_document(&mut session, &mut timers, DocumentMsg::ContentChanged);

        timers.advance(Duration::from_millis(300));
        let fired = timers.expired();
        assert_eq!(fired.len(), 1);

        let cmd = update_scheduler(&mut session, SchedulerMsg::TimerFired(fired[0]));
        assert_eq!(cmd, Some(Cmd::ReadDocument { revision: 2 }));
    }

    #[test]
    fn test_snapshot_read_rebuilds() {
        let mut session = session("a = 1");
        let mut timers = ManualTimers::new();
        update_document(&mut session, &mut timers, DocumentMsg::ContentChanged);

        let cmd = update_document(
            &mut session,
            &mut timers,
            DocumentMsg::SnapshotRead {
                revision: 1,
                text: "a = 1\nb = 2".to_string(),
            },
        );
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(session.nav.outline.len(), 2);
        assert_eq!(session.nav.outline.revision, 1);
    }

    #[test]
    fn test_stale_snapshot_is_discarded() {
        let mut session = session("a = 1");
        let mut timers = ManualTimers::new();
        update_document(&mut session, &mut timers, DocumentMsg::ContentChanged);
        update_document(&mut session, &mut timers, DocumentMsg::ContentChanged);

        let cmd = update_document(
            &mut session,
            &mut timers,
            DocumentMsg::SnapshotRead {
                revision: 1,
                text: "x = 1\ny = 2".to_string(),
            },
        );
        assert!(cmd.is_none());
        assert_eq!(session.nav.outline.items[0].label, "a");
    }

    #[test]
    fn test_replace_resets_everything() {
        let mut session = session("_class = \"Foo\"\na = 1");
        let mut timers = ManualTimers::new();
        session.nav.set_cursor_line(2);
        session
            .schema
            .observe(&session.scanner.clone(), "_class = \"Foo\"");
        update_document(&mut session, &mut timers, DocumentMsg::ContentChanged);

        let cmd = update_document(
            &mut session,
            &mut timers,
            DocumentMsg::Replaced {
                text: "b = 2".to_string(),
            },
        );

        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(session.document.revision, 0);
        assert!(session.scheduler.pending().is_none());
        assert_eq!(timers.pending_count(), 0);
        assert!(session.nav.active_index.is_none());
        assert!(session.nav.cursor_line.is_none());
        assert!(session.schema.current().is_none());
        assert_eq!(session.nav.outline.items[0].label, "b");
    }
}
