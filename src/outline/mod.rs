//! Document structure extraction
//!
//! Scans a KV3 document once and derives the navigable outline and the
//! foldable bracket regions from the same pass. Line numbers in this module
//! are 1-based, matching what the editing host reports.

mod active;
mod extract;
mod folding;
pub mod scan;

use serde::Serialize;

pub use active::{active_index, active_jump_index, jump_list, JUMP_LIST_MAX_DEPTH};
pub use extract::{extract_outline, MAX_OUTLINE_DEPTH};
pub use folding::{fold_ranges, FoldKind, FoldRange};
pub use scan::{scan_document, BracketEvent, LineClass, ScanLine, ScanResult, Scanner};

/// What produced an outline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineKind {
    /// `_class = "Foo"` section anchor
    Declaration,
    /// `identifier = value`
    Key,
}

impl OutlineKind {
    /// Short label for rendering in the outline list
    pub fn label(&self) -> &'static str {
        match self {
            OutlineKind::Declaration => "class",
            OutlineKind::Key => "key",
        }
    }
}

/// A single navigable entry in the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    pub kind: OutlineKind,
    pub label: String,
    pub short_label: String,
    /// 1-based line of the entry
    pub line: usize,
    /// Capped nesting depth, always in `0..=MAX_OUTLINE_DEPTH`
    pub depth: usize,
}

/// Complete outline for one document revision
#[derive(Debug, Clone, Default)]
pub struct OutlineData {
    pub revision: u64,
    pub items: Vec<OutlineItem>,
}

impl OutlineData {
    /// Check if the outline has any entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&OutlineItem> {
        self.items.get(index)
    }
}

/// Everything a rebuild produces for one document revision
#[derive(Debug, Clone, Default)]
pub struct DocumentStructure {
    pub outline: OutlineData,
    pub folds: Vec<FoldRange>,
}

/// Scan `lines` once and derive both the outline and the fold ranges
pub fn build_structure<S: AsRef<str>>(
    scanner: &Scanner,
    lines: &[S],
    revision: u64,
) -> DocumentStructure {
    let scan = scanner.scan(lines);
    DocumentStructure {
        outline: extract_outline(&scan, revision),
        folds: fold_ranges(&scan),
    }
}
