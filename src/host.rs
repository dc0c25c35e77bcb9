//! Host-facing seams: the text widget and the documentation surface
//!
//! The navigation engine never owns the text. It is told that content
//! changed or the cursor moved, and reads the text back when it needs it.

use anyhow::Context;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use url::Url;

use crate::fs_watcher::FileWatcher;

/// Notifications from the host widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Text changed; no diff is supplied
    ContentChanged,
    /// Cursor moved to a 1-based line/column
    CursorMoved { line: usize, column: usize },
}

/// The text widget hosting the document
pub trait TextHost {
    /// Full current text
    fn text(&mut self) -> anyhow::Result<String>;

    /// Events queued since the last call, oldest first
    fn drain_events(&mut self) -> Vec<HostEvent>;

    /// Move the cursor to a 1-based line/column
    fn set_position(&mut self, line: usize, column: usize) -> anyhow::Result<()>;

    /// Scroll so `line` is centered if possible
    fn reveal_line(&mut self, line: usize) -> anyhow::Result<()>;

    /// Content of a 1-based line, without its terminator
    fn line_text(&mut self, line: usize) -> anyhow::Result<Option<String>> {
        let text = self.text()?;
        Ok(line
            .checked_sub(1)
            .and_then(|index| text.lines().nth(index))
            .map(str::to_string))
    }
}

/// A file on disk acting as the text host
///
/// The cursor is simulated; edits come from other programs saving the file
/// and are picked up by an optional [`FileWatcher`].
pub struct FileHost {
    path: PathBuf,
    cursor: (usize, usize),
    events: VecDeque<HostEvent>,
    watcher: Option<FileWatcher>,
}

impl FileHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cursor: (1, 1),
            events: VecDeque::new(),
            watcher: None,
        }
    }

    /// Host that reports saves to the file as content changes
    pub fn watched(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let watcher = FileWatcher::new(path.clone())
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        Ok(Self {
            watcher: Some(watcher),
            ..Self::new(path)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current 1-based cursor position
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Simulate an external content change
    pub fn notify_changed(&mut self) {
        self.events.push_back(HostEvent::ContentChanged);
    }
}

impl TextHost for FileHost {
    fn text(&mut self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    fn drain_events(&mut self) -> Vec<HostEvent> {
        if self.watcher.as_ref().is_some_and(|w| w.poll_changed()) {
            self.events.push_back(HostEvent::ContentChanged);
        }
        self.events.drain(..).collect()
    }

    fn set_position(&mut self, line: usize, column: usize) -> anyhow::Result<()> {
        self.cursor = (line.max(1), column.max(1));
        // Programmatic moves are reported like user moves
        self.events.push_back(HostEvent::CursorMoved {
            line: self.cursor.0,
            column: self.cursor.1,
        });
        Ok(())
    }

    fn reveal_line(&mut self, line: usize) -> anyhow::Result<()> {
        tracing::debug!("Reveal {}:{}", self.path.display(), line);
        Ok(())
    }
}

/// Where documentation pages are shown
pub trait DocsSurface {
    /// Fire-and-forget navigation
    fn navigate(&mut self, url: &Url) -> anyhow::Result<()>;
}

/// Opens documentation pages in the system browser
#[derive(Debug, Default)]
pub struct BrowserSurface;

impl DocsSurface for BrowserSurface {
    fn navigate(&mut self, url: &Url) -> anyhow::Result<()> {
        tracing::info!("Opening documentation: {}", url);
        open::that(url.as_str()).with_context(|| format!("Failed to open {}", url))
    }
}

/// Logs documentation pages instead of showing them
#[derive(Debug, Default)]
pub struct LogSurface {
    last: Option<Url>,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently requested page
    pub fn last(&self) -> Option<&Url> {
        self.last.as_ref()
    }
}

impl DocsSurface for LogSurface {
    fn navigate(&mut self, url: &Url) -> anyhow::Result<()> {
        tracing::info!("Documentation: {}", url);
        self.last = Some(url.clone());
        Ok(())
    }
}
