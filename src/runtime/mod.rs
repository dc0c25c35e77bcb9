//! Runtime - wires the update functions to the host, timers and storage
//!
//! Host events and expired timers become [`Msg`]s, [`update`] turns them into
//! [`Cmd`]s, and commands are executed here. Anything a command produces
//! (such as the text read for a rebuild) is fed back as another message.
//! Command failures are logged and never stop the loop.

use std::collections::VecDeque;

use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::host::{DocsSurface, HostEvent, TextHost};
use crate::messages::{CursorMsg, DocumentMsg, Msg, SchedulerMsg, SchemaMsg};
use crate::model::{EditorSession, OutlineView};
use crate::scheduler::{SystemTimers, Timers};
use crate::schema::{now_epoch_ms, SchemaRecord, SchemaStore};
use crate::update::update;

/// One navigation session bound to a host
pub struct Runtime<H: TextHost, T: Timers = SystemTimers> {
    session: EditorSession,
    host: H,
    timers: T,
    store: Box<dyn SchemaStore>,
    docs: Box<dyn DocsSurface>,
}

impl<H: TextHost, T: Timers> Runtime<H, T> {
    /// Read the host's text, build the first outline and restore the last
    /// viewed schema
    ///
    /// Fails only if the host cannot supply its text; nothing is built then.
    pub fn start(
        mut host: H,
        timers: T,
        store: Box<dyn SchemaStore>,
        docs: Box<dyn DocsSurface>,
        config: EditorConfig,
    ) -> anyhow::Result<Self> {
        let text = host.text().inspect_err(|e| {
            tracing::error!("Text host failed to initialize: {:#}", e);
        })?;

        let mut runtime = Self {
            session: EditorSession::new(&text, config),
            host,
            timers,
            store,
            docs,
        };

        let record = runtime.load_schema();
        runtime.dispatch(Msg::Schema(SchemaMsg::Restore {
            record,
            now_ms: now_epoch_ms(),
        }));

        tracing::info!(
            "Session started: {} lines, {} outline items",
            runtime.session.document.line_count(),
            runtime.session.nav.outline.len()
        );
        Ok(runtime)
    }

    fn load_schema(&self) -> Option<SchemaRecord> {
        self.store.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load saved schema: {:#}", e);
            None
        })
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Render-ready outline, jump list and folds
    pub fn view(&self) -> OutlineView {
        self.session.view()
    }

    /// Process every event the host has queued
    ///
    /// Returns true if the view changed.
    pub fn pump(&mut self) -> bool {
        let mut needs_redraw = false;
        // Commands such as reveal can queue further host events
        loop {
            let events = self.host.drain_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                let msg = self.host_event_msg(event);
                needs_redraw |= self.dispatch(msg);
            }
        }
        needs_redraw
    }

    fn host_event_msg(&mut self, event: HostEvent) -> Msg {
        match event {
            HostEvent::ContentChanged => Msg::Document(DocumentMsg::ContentChanged),
            HostEvent::CursorMoved { line, column } => {
                let text = match self.host.line_text(line) {
                    Ok(text) => text.unwrap_or_default(),
                    Err(e) => {
                        tracing::warn!("Failed to read line {}: {:#}", line, e);
                        String::new()
                    }
                };
                Msg::Cursor(CursorMsg::Moved { line, column, text })
            }
        }
    }

    /// Fire expired timers
    ///
    /// Returns true if the view changed.
    pub fn tick(&mut self) -> bool {
        let mut needs_redraw = false;
        for id in self.timers.expired() {
            needs_redraw |= self.dispatch(Msg::Scheduler(SchedulerMsg::TimerFired(id)));
        }
        needs_redraw
    }

    /// The host opened a different document; start over from its text
    pub fn replace_document(&mut self) -> anyhow::Result<bool> {
        let text = self.host.text()?;
        Ok(self.dispatch(Msg::Document(DocumentMsg::Replaced { text })))
    }

    /// Run a message through update and execute the resulting commands
    ///
    /// Returns true if the view changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let mut needs_redraw = false;
        let mut queue = VecDeque::from([msg]);

        while let Some(msg) = queue.pop_front() {
            let Some(cmd) = update(&mut self.session, &mut self.timers, msg) else {
                continue;
            };
            needs_redraw |= cmd.needs_redraw();
            for cmd in cmd.flatten() {
                queue.extend(self.process_cmd(cmd));
            }
        }
        needs_redraw
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Option<Msg> {
        match cmd {
            Cmd::None | Cmd::Redraw | Cmd::Batch(_) => None,
            Cmd::ReadDocument { revision } => match self.host.text() {
                Ok(text) => Some(Msg::Document(DocumentMsg::SnapshotRead { revision, text })),
                Err(e) => {
                    tracing::warn!("Failed to read document for rebuild: {:#}", e);
                    None
                }
            },
            Cmd::RevealLine { line } => {
                if let Err(e) = self
                    .host
                    .set_position(line, 1)
                    .and_then(|()| self.host.reveal_line(line))
                {
                    tracing::warn!("Failed to reveal line {}: {:#}", line, e);
                }
                None
            }
            Cmd::PersistSchema { name } => {
                let record = SchemaRecord {
                    name,
                    ts: now_epoch_ms(),
                };
                if let Err(e) = self.store.save(&record) {
                    tracing::warn!("Failed to save schema {}: {:#}", record.name, e);
                }
                None
            }
            Cmd::NavigateDocs { url } => {
                if let Err(e) = self.docs.navigate(&url) {
                    tracing::warn!("Failed to show documentation {}: {:#}", url, e);
                }
                None
            }
        }
    }
}
