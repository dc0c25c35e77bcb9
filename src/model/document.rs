//! Document model - the latest snapshot of the host's text

use ropey::Rope;
use std::path::PathBuf;

/// Snapshot of the edited document
///
/// The host widget owns the real text; this is the copy the navigation
/// engine last read. `revision` counts content-changed notifications.
#[derive(Debug, Clone)]
pub struct Document {
    /// Text as of the last rebuild
    pub buffer: Rope,
    /// Path to the file on disk (None for text handed over by the host)
    pub file_path: Option<PathBuf>,
    /// Revision counter (incremented on each content-changed notification)
    /// Used for staleness checking of snapshot reads
    pub revision: u64,
    /// Revision the buffer was read at
    pub snapshot_revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            revision: 0,
            snapshot_revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self {
            file_path: Some(path),
            ..Self::with_text(&content)
        })
    }

    /// File name for logs, or "Untitled" for text handed over by the host
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Record a content-changed notification
    pub fn mark_changed(&mut self) -> u64 {
        self.revision = self.revision.wrapping_add(1);
        self.revision
    }

    /// Replace the snapshot with text read at `revision`
    pub fn set_snapshot(&mut self, text: &str, revision: u64) {
        self.buffer = Rope::from(text);
        self.snapshot_revision = revision;
    }

    /// Get the number of lines in the document
    ///
    /// A trailing newline does not start an extra line.
    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    /// Text of a 1-based line without its line ending
    pub fn line_text(&self, line: usize) -> Option<String> {
        let idx = line.checked_sub(1)?;
        if idx >= self.buffer.len_lines() {
            return None;
        }
        Some(strip_line_ending(&self.buffer.line(idx).to_string()).to_string())
    }

    /// All lines, 1-based order, without line endings
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .buffer
            .lines()
            .map(|l| strip_line_ending(&l.to_string()).to_string())
            .collect();
        // ropey yields an empty final line after a trailing newline
        if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }
}

/// Drop one `\n` and then one `\r`, the same ending `str::lines` removes
fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
