//! File system watching for the `watch` command
//!
//! Uses the `notify` crate with a short debounce to turn saves made by an
//! external editor into content-changed notifications. The real rebuild
//! debounce happens in [`crate::scheduler`].

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Coalesces the burst of events a single save produces
const WATCH_DEBOUNCE_MS: u64 = 50;

/// Watches one file for modifications
///
/// The parent directory is watched non-recursively so editors that save by
/// rename-over are still seen.
pub struct FileWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    /// Receiver for debounced events
    rx: Receiver<Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    /// File being watched
    path: PathBuf,
}

impl FileWatcher {
    pub fn new(path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(Duration::from_millis(WATCH_DEBOUNCE_MS), tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        debouncer
            .watcher()
            .watch(&dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Started file watcher for: {}", path.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Poll for changes to the watched file (non-blocking)
    ///
    /// Returns true if the file changed since the last poll.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;

        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    changed |= events.iter().any(|event| {
                        !matches!(event.kind, DebouncedEventKind::AnyContinuous)
                            && self.is_watched(&event.path)
                    });
                }
                Err(e) => {
                    tracing::warn!("File watcher error: {:?}", e);
                }
            }
        }

        if changed {
            tracing::debug!("File watcher saw a change to {}", self.path.display());
        }
        changed
    }

    /// Whether an event path refers to the watched file
    fn is_watched(&self, event_path: &Path) -> bool {
        if event_path == self.path {
            return true;
        }
        // Events arrive with absolute paths; the watched path may be relative
        match (event_path.canonicalize(), self.path.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => event_path.file_name() == self.path.file_name(),
        }
    }
}
