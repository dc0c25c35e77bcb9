//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use url::Url;
use vdata_nav::config::EditorConfig;
use vdata_nav::host::{DocsSurface, HostEvent, TextHost};
use vdata_nav::runtime::Runtime;
use vdata_nav::scheduler::ManualTimers;
use vdata_nav::schema::{MemorySchemaStore, SchemaRecord, SchemaStore};

/// In-memory text host that records what the runtime asked of it
#[derive(Debug, Default)]
pub struct FakeHost {
    pub text: String,
    pub events: VecDeque<HostEvent>,
    pub fail_reads: bool,
    /// Number of full-text reads
    pub reads: usize,
    pub positions: Vec<(usize, usize)>,
    pub revealed: Vec<usize>,
}

impl FakeHost {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Replace the text and report a content change
    pub fn edit(&mut self, text: &str) {
        self.text = text.to_string();
        self.events.push_back(HostEvent::ContentChanged);
    }

    /// Report a cursor move without changing anything else
    pub fn move_cursor(&mut self, line: usize) {
        self.events
            .push_back(HostEvent::CursorMoved { line, column: 1 });
    }
}

impl TextHost for FakeHost {
    fn text(&mut self) -> anyhow::Result<String> {
        if self.fail_reads {
            anyhow::bail!("host not ready");
        }
        self.reads += 1;
        Ok(self.text.clone())
    }

    fn drain_events(&mut self) -> Vec<HostEvent> {
        self.events.drain(..).collect()
    }

    fn set_position(&mut self, line: usize, column: usize) -> anyhow::Result<()> {
        self.positions.push((line, column));
        self.events
            .push_back(HostEvent::CursorMoved { line, column });
        Ok(())
    }

    fn reveal_line(&mut self, line: usize) -> anyhow::Result<()> {
        self.revealed.push(line);
        Ok(())
    }
}

/// Schema store whose contents stay visible after it is boxed
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    pub inner: Rc<RefCell<MemorySchemaStore>>,
    pub fail: bool,
}

impl SharedStore {
    pub fn with_record(name: &str, ts: u64) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().record = Some(SchemaRecord {
            name: name.to_string(),
            ts,
        });
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn record(&self) -> Option<SchemaRecord> {
        self.inner.borrow().record.clone()
    }
}

impl SchemaStore for SharedStore {
    fn load(&self) -> anyhow::Result<Option<SchemaRecord>> {
        if self.fail {
            anyhow::bail!("storage unavailable");
        }
        self.inner.borrow().load()
    }

    fn save(&mut self, record: &SchemaRecord) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("storage unavailable");
        }
        self.inner.borrow_mut().save(record)
    }
}

/// Documentation surface that records every navigation
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub visited: Rc<RefCell<Vec<Url>>>,
}

impl RecordingSurface {
    pub fn count(&self) -> usize {
        self.visited.borrow().len()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().map(|u| u.as_str().to_string())
    }
}

impl DocsSurface for RecordingSurface {
    fn navigate(&mut self, url: &Url) -> anyhow::Result<()> {
        self.visited.borrow_mut().push(url.clone());
        Ok(())
    }
}

pub type TestRuntime = Runtime<FakeHost, ManualTimers>;

/// Runtime over `text` with an empty store and a recording surface
pub fn start(text: &str) -> (TestRuntime, SharedStore, RecordingSurface) {
    start_with(FakeHost::new(text), SharedStore::default())
}

pub fn start_with(host: FakeHost, store: SharedStore) -> (TestRuntime, SharedStore, RecordingSurface) {
    let surface = RecordingSurface::default();
    let runtime = Runtime::start(
        host,
        ManualTimers::new(),
        Box::new(store.clone()),
        Box::new(surface.clone()),
        EditorConfig::default(),
    )
    .expect("fake host always starts");
    (runtime, store, surface)
}

/// Labels of the current outline, in order
pub fn labels(runtime: &TestRuntime) -> Vec<String> {
    runtime
        .view()
        .items
        .into_iter()
        .map(|item| item.label)
        .collect()
}
