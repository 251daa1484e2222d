//! Algebraic properties of reconciliation and relocation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use taxo_order::{reconcile, relocate};

fn value() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,5}"
}

fn saved_order() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(value(), 0..12)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn live_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(value(), 0..12)
}

proptest! {
    #[test]
    fn reconciliation_is_complete(saved in saved_order(), live in live_set()) {
        let result = reconcile(&saved, &live);
        prop_assert_eq!(result.len(), live.len());
        let as_set: BTreeSet<String> = result.iter().cloned().collect();
        prop_assert_eq!(&as_set, &live);
        // Same length as the set means no duplicates.
        prop_assert_eq!(as_set.len(), result.len());
    }

    #[test]
    fn reconciliation_is_complete_for_duplicated_saved_orders(
        // Drawn with replacement so repeated values occur, unlike
        // `saved_order()`.
        saved in prop::collection::vec(value(), 0..12),
        live in live_set(),
    ) {
        let result = reconcile(&saved, &live);
        prop_assert_eq!(result.len(), live.len());
        let as_set: BTreeSet<String> = result.iter().cloned().collect();
        prop_assert_eq!(as_set, live);
    }

    #[test]
    fn reconciliation_is_idempotent(saved in saved_order(), live in live_set()) {
        let once = reconcile(&saved, &live);
        let twice = reconcile(&once, &live);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reconciliation_is_stable_when_membership_matches(saved in saved_order()) {
        let live: BTreeSet<String> = saved.iter().cloned().collect();
        prop_assert_eq!(reconcile(&saved, &live), saved);
    }

    #[test]
    fn empty_saved_order_sorts_the_live_set(live in live_set()) {
        let sorted: Vec<String> = live.iter().cloned().collect();
        prop_assert_eq!(reconcile(&[], &live), sorted);
    }

    #[test]
    fn survivors_keep_their_saved_relative_order(saved in saved_order(), live in live_set()) {
        let result = reconcile(&saved, &live);
        let survivors: Vec<&String> = saved.iter().filter(|v| live.contains(*v)).collect();
        let in_result: Vec<&String> = result
            .iter()
            .filter(|v| saved.contains(*v))
            .collect();
        prop_assert_eq!(survivors, in_result);
    }

    #[test]
    fn relocation_preserves_membership(
        saved in saved_order(),
        item in value(),
        target in 0usize..16,
    ) {
        let mut order = saved.clone();
        relocate(&mut order, &item, target);
        let mut before: Vec<String> = saved.clone();
        let mut after = order.clone();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn relocation_lands_the_item_where_it_was_dropped(
        saved in prop::collection::btree_set(value(), 1..12)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        index in 0usize..12,
        target in 0usize..16,
    ) {
        let order: Vec<String> = saved;
        let item = order[index % order.len()].clone();
        let mut moved = order.clone();
        prop_assert!(relocate(&mut moved, &item, target));

        let expected = target.min(order.len() - 1);
        prop_assert_eq!(moved.iter().position(|v| *v == item), Some(expected));
    }
}
