//! Commands for side effects in the Elm-style architecture
//!
//! Commands are returned by update functions and executed by the runtime.

use url::Url;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Outline, jump list or highlight changed
    Redraw,
    /// Read the full text from the host and send `DocumentMsg::SnapshotRead`
    ReadDocument { revision: u64 },
    /// Move the host cursor to a 1-based line and scroll it into view
    RevealLine { line: usize },
    /// Write the selected schema, timestamped now, to durable storage
    PersistSchema { name: String },
    /// Point the documentation surface at a page (fire-and-forget)
    NavigateDocs { url: Url },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::None
            | Cmd::ReadDocument { .. }
            | Cmd::RevealLine { .. }
            | Cmd::PersistSchema { .. }
            | Cmd::NavigateDocs { .. } => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
