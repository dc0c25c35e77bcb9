//! Session model - the complete navigation state for one open document
//!
//! Everything the update functions touch lives in one [`EditorSession`]
//! value, passed explicitly instead of captured from module globals.

pub mod document;
pub mod navigation;

pub use document::Document;
pub use navigation::{NavigationState, OutlineEntry, OutlineView};

use crate::config::EditorConfig;
use crate::outline::{build_structure, Scanner};
use crate::scheduler::UpdateScheduler;
use crate::schema::SchemaTracker;

/// State for one editor session over one document
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// Latest snapshot of the host's text
    pub document: Document,
    /// Outline, folds and highlights from the last rebuild
    pub nav: NavigationState,
    /// Pending debounced rebuild, if any
    pub scheduler: UpdateScheduler,
    /// Schema currently shown in the documentation surface
    pub schema: SchemaTracker,
    /// Line classifier for the configured declaration key
    pub scanner: Scanner,
    pub config: EditorConfig,
}

impl EditorSession {
    /// Create a session over `text` and build its outline immediately
    pub fn new(text: &str, config: EditorConfig) -> Self {
        Self::with_document(Document::with_text(text), config)
    }

    /// Start a session over an already loaded document
    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        let mut session = Self {
            document,
            nav: NavigationState::default(),
            scheduler: UpdateScheduler::new(config.debounce()),
            schema: SchemaTracker::new(),
            scanner: Scanner::new(&config.declaration_key),
            config,
        };
        session.rebuild();
        session
    }

    /// Full rescan of the current snapshot; replaces the navigation state
    pub fn rebuild(&mut self) {
        let lines = self.document.lines();
        let structure = build_structure(&self.scanner, &lines, self.document.snapshot_revision);
        tracing::debug!(
            "Rebuilt outline for {}: rev={} lines={} items={} folds={}",
            self.document.display_name(),
            self.document.snapshot_revision,
            lines.len(),
            structure.outline.len(),
            structure.folds.len()
        );
        self.nav = NavigationState::from_structure(structure, self.nav.cursor_line);
    }

    /// Render-ready snapshot of the navigation state
    pub fn view(&self) -> OutlineView {
        self.nav.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_builds_outline() {
        let session = EditorSession::new("a = 1\nb = 2", EditorConfig::default());
        assert_eq!(session.nav.outline.len(), 2);
        assert!(session.nav.folds.is_empty());
        assert!(session.scheduler.pending().is_none());
        assert!(session.schema.current().is_none());
    }

    #[test]
    fn test_session_over_loaded_file_keeps_path() {
        let mut document = Document::with_text("a = 1\nb =\n{\n}");
        document.file_path = Some(std::path::PathBuf::from("samples/hero.vdata"));
        let session = EditorSession::with_document(document, EditorConfig::default());

        assert_eq!(session.document.display_name(), "hero.vdata");
        assert_eq!(session.nav.outline.len(), 2);
        assert_eq!(session.nav.folds.len(), 1);
    }

    #[test]
    fn test_rebuild_keeps_cursor_highlight() {
        let mut session = EditorSession::new("a = 1\nb = 2", EditorConfig::default());
        session.nav.set_cursor_line(2);

        session.document.set_snapshot("x = 1\ny = 2\nz = 3", 1);
        session.rebuild();

        assert_eq!(session.nav.outline.revision, 1);
        assert_eq!(session.nav.active_item().unwrap().label, "y");
    }

    #[test]
    fn test_configured_declaration_key() {
        let config = EditorConfig {
            declaration_key: "generic_data_type".to_string(),
            ..EditorConfig::default()
        };
        let session = EditorSession::new("generic_data_type = \"Foo\"", config);
        assert_eq!(
            session.nav.outline.items[0].label,
            "generic_data_type = Foo"
        );
    }
}
