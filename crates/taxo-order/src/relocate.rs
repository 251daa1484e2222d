//! Single-item relocation within one order.
//!
//! A drag-and-drop move is remove-then-reinsert: the target index names the
//! slot the item occupies in the resulting order. The engine
//! is deliberately tolerant: a user gesture can race with dataset changes
//! (the dragged value deleted moments before the drop) or land on the wrong
//! column entirely, and a stale gesture is ignored rather than surfaced as a
//! transient error.

/// Move `item` so it lands at `target_index` of the resulting order, keeping
/// every other item in its relative position.
///
/// Returns `false` without touching the order when `item` is not present
/// (stale or cross-dimension drop). A `target_index` beyond the end clamps to
/// the last position.
pub fn relocate<T: PartialEq>(order: &mut Vec<T>, item: &T, target_index: usize) -> bool {
    let Some(current) = order.iter().position(|existing| existing == item) else {
        return false;
    };
    let moved = order.remove(current);
    order.insert(target_index.min(order.len()), moved);
    true
}
