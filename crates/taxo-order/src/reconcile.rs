//! Order reconciliation: merge a saved order with the live value set.
//!
//! This is the stability contract the whole subsystem exists to provide:
//! reconciliation alone never reorders anything. Surviving saved items keep
//! their exact saved relative order; values never seen before are appended in
//! natural sort order; values no longer present are dropped.

use std::collections::BTreeSet;

/// Merge `saved` with the current `live` value set.
///
/// The result is always a permutation of `live`. When `saved` is empty it is
/// exactly `live` in sorted order, and when `saved` and `live` agree on
/// membership it is identical to `saved`.
///
/// A value that left the live set and later returned is treated as brand-new:
/// it re-enters among the fresh items in sorted position rather than at its
/// old slot.
///
/// A duplicated value in `saved` (a hand-edited or legacy document) keeps its
/// first occurrence only, so the result stays distinct.
pub fn reconcile<T: Ord + Clone>(saved: &[T], live: &BTreeSet<T>) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(live.len());
    for item in saved {
        if live.contains(item) && !result.contains(item) {
            result.push(item.clone());
        }
    }
    // BTreeSet iteration order gives the fresh items already sorted.
    result.extend(
        live.iter()
            .filter(|item| !saved.contains(*item))
            .cloned(),
    );
    result
}
