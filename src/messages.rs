//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::scheduler::TimerId;

/// Document content messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Host reported an edit (no diff payload; the text is re-read later)
    ContentChanged,
    /// Fresh text read from the host for `revision`
    SnapshotRead { revision: u64, text: String },
    /// A different file was opened; all navigation state starts over
    Replaced { text: String },
}

/// Cursor messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorMsg {
    /// Cursor moved to a 1-based line/column; `text` is that line's content
    Moved {
        line: usize,
        column: usize,
        text: String,
    },
}

/// Outline and jump list interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineMsg {
    /// Activate an entry of the full outline list
    ActivateItem(usize),
    /// Activate an entry of the filtered jump list
    ActivateJump(usize),
    /// Jump to an arbitrary 1-based line
    JumpToLine(usize),
}

/// Debounce timer messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerMsg {
    TimerFired(TimerId),
}

/// Schema documentation messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaMsg {
    /// Seed the current schema from storage at session start
    Restore {
        record: Option<crate::schema::SchemaRecord>,
        now_ms: u64,
    },
}

/// Top-level message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Document(DocumentMsg),
    Cursor(CursorMsg),
    Outline(OutlineMsg),
    Scheduler(SchedulerMsg),
    Schema(SchemaMsg),
}
