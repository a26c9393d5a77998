//! Next-recipient selection

use crate::types::Member;

/// Index of the member the fairness rule designates as next in line
///
/// The first member carrying owed credit outranks everyone ahead of them;
/// with no debt outstanding the queue head is next. Returns `None` only for
/// an empty queue. Pure, O(n).
pub fn next_index(active: &[Member]) -> Option<usize> {
    if active.is_empty() {
        return None;
    }
    Some(
        active
            .iter()
            .position(|m| m.owed > 0)
            .unwrap_or(0),
    )
}
