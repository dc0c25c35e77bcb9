//! Per-document navigation state: last outline, folds and highlights

use serde::Serialize;

use crate::outline::{
    active_index, active_jump_index, jump_list, DocumentStructure, FoldRange, OutlineData,
    OutlineItem, OutlineKind,
};

/// Navigation state for one open document, replaced wholesale on rebuild
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub outline: OutlineData,
    pub folds: Vec<FoldRange>,
    /// Highlighted outline entry (None when the cursor is above every entry)
    pub active_index: Option<usize>,
    /// Highlighted jump list entry
    pub active_jump: Option<usize>,
    /// Last cursor line seen, reapplied after a rebuild
    pub cursor_line: Option<usize>,
}

impl NavigationState {
    /// Fresh state from a rebuild, keeping the highlight in step with the cursor
    pub fn from_structure(structure: DocumentStructure, cursor_line: Option<usize>) -> Self {
        let mut nav = Self {
            outline: structure.outline,
            folds: structure.folds,
            active_index: None,
            active_jump: None,
            cursor_line: None,
        };
        if let Some(line) = cursor_line {
            nav.set_cursor_line(line);
        }
        nav
    }

    /// Update highlights for a cursor move; returns true if either changed
    pub fn set_cursor_line(&mut self, line: usize) -> bool {
        self.cursor_line = Some(line);

        let active = active_index(&self.outline.items, line);
        let jumps = jump_list(&self.outline.items);
        let active_jump = active_jump_index(&jumps, active.and_then(|i| self.outline.get(i)));

        let changed = active != self.active_index || active_jump != self.active_jump;
        self.active_index = active;
        self.active_jump = active_jump;
        changed
    }

    pub fn active_item(&self) -> Option<&OutlineItem> {
        self.active_index.and_then(|i| self.outline.get(i))
    }

    pub fn jump_list(&self) -> Vec<&OutlineItem> {
        jump_list(&self.outline.items)
    }

    /// Render-ready snapshot of the outline and jump list
    pub fn view(&self) -> OutlineView {
        let entry = |item: &OutlineItem, active: bool| OutlineEntry {
            kind: item.kind,
            label: item.label.clone(),
            short_label: item.short_label.clone(),
            line: item.line,
            depth: item.depth,
            active,
        };

        OutlineView {
            revision: self.outline.revision,
            items: self
                .outline
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| entry(item, self.active_index == Some(i)))
                .collect(),
            jumps: self
                .jump_list()
                .into_iter()
                .enumerate()
                .map(|(i, item)| entry(item, self.active_jump == Some(i)))
                .collect(),
            folds: self.folds.clone(),
        }
    }
}

/// One rendered row of the outline or jump list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub kind: OutlineKind,
    pub label: String,
    pub short_label: String,
    pub line: usize,
    pub depth: usize,
    pub active: bool,
}

/// What the rendering layer draws after a rebuild or cursor move
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutlineView {
    pub revision: u64,
    pub items: Vec<OutlineEntry>,
    pub jumps: Vec<OutlineEntry>,
    pub folds: Vec<FoldRange>,
}
