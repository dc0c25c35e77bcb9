//! Outline extraction from scanner output
//!
//! Declarations become depth-0 section anchors regardless of their real
//! nesting; key lines take their live bracket depth, capped.

use super::scan::{LineClass, ScanResult};
use super::{OutlineData, OutlineItem, OutlineKind};

/// Deepest level rendered in the outline ("section / field / nested field")
pub const MAX_OUTLINE_DEPTH: usize = 2;

/// Build the outline for one scanned revision, in document order
pub fn extract_outline(scan: &ScanResult, revision: u64) -> OutlineData {
    let items = scan
        .lines
        .iter()
        .filter_map(|line| match &line.class {
            LineClass::Declaration { key, value } => Some(OutlineItem {
                kind: OutlineKind::Declaration,
                label: format!("{} = {}", key, value),
                short_label: value.clone(),
                line: line.line,
                depth: 0,
            }),
            LineClass::Key { name } => Some(OutlineItem {
                kind: OutlineKind::Key,
                label: name.clone(),
                short_label: name.clone(),
                line: line.line,
                depth: line.entry_depth.min(MAX_OUTLINE_DEPTH),
            }),
            LineClass::Plain => None,
        })
        .collect();

    OutlineData { revision, items }
}
