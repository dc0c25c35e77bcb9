//! Active-item tracking and the filtered jump list

use super::OutlineItem;

/// Deepest outline level included in the jump list
pub const JUMP_LIST_MAX_DEPTH: usize = 1;

/// Index of the last item at or above `cursor_line`
///
/// Outlines are small and sorted by line, so a linear scan is enough.
pub fn active_index(items: &[OutlineItem], cursor_line: usize) -> Option<usize> {
    let mut active = None;
    for (idx, item) in items.iter().enumerate() {
        if item.line > cursor_line {
            break;
        }
        active = Some(idx);
    }
    active
}

/// Items shallow enough to appear in the jump list, in outline order
pub fn jump_list(items: &[OutlineItem]) -> Vec<&OutlineItem> {
    items
        .iter()
        .filter(|item| item.depth <= JUMP_LIST_MAX_DEPTH)
        .collect()
}

/// Jump list entry to highlight for the active item
///
/// The jump list is a different ordering, so entries are matched by
/// `short_label`, not by index.
pub fn active_jump_index(jumps: &[&OutlineItem], active: Option<&OutlineItem>) -> Option<usize> {
    let active = active?;
    jumps
        .iter()
        .position(|item| item.short_label == active.short_label)
}
