//! Folding range resolution
//!
//! Replays the scanner's bracket trace through an open-bracket stack. A close
//! pops whatever is on top, regardless of bracket kind.

use serde::Serialize;

use super::scan::ScanResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldKind {
    Region,
}

/// A collapsible multi-line span (1-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldRange {
    pub start: usize,
    pub end: usize,
    pub kind: FoldKind,
}

/// Multi-line bracket spans, in the order their closing bracket appears
///
/// Unmatched closes are skipped and unmatched opens never produce a range.
pub fn fold_ranges(scan: &ScanResult) -> Vec<FoldRange> {
    let mut stack: Vec<usize> = Vec::new();
    let mut ranges = Vec::new();

    for event in &scan.brackets {
        if event.is_open() {
            stack.push(event.line);
            continue;
        }

        let Some(open_line) = stack.pop() else {
            continue;
        };

        if open_line < event.line {
            ranges.push(FoldRange {
                start: open_line,
                end: event.line,
                kind: FoldKind::Region,
            });
        }
    }

    ranges
}
