//! Selection cascade and the editing session.
//!
//! Which Grouping order and List order are active for relocation depends on
//! what the user currently has focused. The focus is a three-state machine:
//! nothing, one Set, or one (Set, Grouping) pair. A Grouping can never be
//! focused without its Set, so the illegal combination is unrepresentable.

use tracing::debug;

use taxo_model::{FlatDimension, OrderDocument, Record};

use crate::hierarchy::WorkingOrder;
use crate::relocate::relocate;

/// Current focus within the Set → Grouping → List hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Set(String),
    SetGrouping(String, String),
}

impl Selection {
    /// Apply a click on a Level-1 value.
    ///
    /// Selecting any Set clears a focused Grouping; clicking the already
    /// focused Set toggles back to no selection.
    pub fn select_set(self, set: &str) -> Selection {
        match self {
            Selection::Set(current) if current == set => Selection::None,
            Selection::SetGrouping(current, _) if current == set => Selection::None,
            _ => Selection::Set(set.to_string()),
        }
    }

    /// Apply a click on a Level-2 value.
    ///
    /// Meaningless without a focused Set (ignored); clicking the already
    /// focused Grouping drops back to the Set alone.
    pub fn select_grouping(self, grouping: &str) -> Selection {
        match self {
            Selection::None => Selection::None,
            Selection::Set(set) => Selection::SetGrouping(set, grouping.to_string()),
            Selection::SetGrouping(set, current) if current == grouping => Selection::Set(set),
            Selection::SetGrouping(set, _) => {
                Selection::SetGrouping(set, grouping.to_string())
            }
        }
    }

    /// The focused Set, if any.
    pub fn set(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Set(set) | Selection::SetGrouping(set, _) => Some(set),
        }
    }

    /// The focused (Set, Grouping) pair, if any.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match self {
            Selection::SetGrouping(set, grouping) => Some((set, grouping)),
            _ => None,
        }
    }
}

/// One editing session: the working order, the live dataset it was reconciled
/// against, and the current focus.
///
/// The session exclusively owns the working order. Scoped orders load lazily
/// as focus reaches them and stay cached regardless of later focus changes,
/// so switching away from a scope and back never discards its edits.
/// Dropping the session abandons all edits; [`Self::commit`] packages them.
#[derive(Debug)]
pub struct OrderingSession<'a> {
    records: &'a [Record],
    working: WorkingOrder,
    selection: Selection,
}

impl<'a> OrderingSession<'a> {
    /// Start a session by reconciling a saved document against the dataset.
    pub fn new(saved: OrderDocument, records: &'a [Record]) -> Self {
        Self {
            records,
            working: WorkingOrder::reconcile(saved, records),
            selection: Selection::None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn working(&self) -> &WorkingOrder {
        &self.working
    }

    /// Focus (or toggle off) a Level-1 value, loading its Grouping order on
    /// first focus.
    pub fn select_set(&mut self, set: &str) {
        self.selection = std::mem::take(&mut self.selection).select_set(set);
        if let Some(focused) = self.selection.set() {
            let focused = focused.to_string();
            self.working.grouping_order(self.records, &focused);
        }
    }

    /// Focus (or toggle off) a Level-2 value under the focused Set, loading
    /// the pair's List order on first focus.
    pub fn select_grouping(&mut self, grouping: &str) {
        self.selection = std::mem::take(&mut self.selection).select_grouping(grouping);
        if let Some((set, grouping)) = self.selection.pair() {
            let (set, grouping) = (set.to_string(), grouping.to_string());
            self.working.list_order(self.records, &set, &grouping);
        }
    }

    pub fn flat_order(&self, dimension: FlatDimension) -> &[String] {
        self.working.flat_order(dimension)
    }

    pub fn set_order(&self) -> &[String] {
        self.working.set_order()
    }

    /// Grouping order for the focused Set; `None` without a focus.
    pub fn grouping_order(&mut self) -> Option<&[String]> {
        let set = self.selection.set()?.to_string();
        Some(self.working.grouping_order(self.records, &set))
    }

    /// List order for the focused (Set, Grouping) pair; `None` without one.
    pub fn list_order(&mut self) -> Option<&[String]> {
        let (set, grouping) = self.selection.pair()?;
        let (set, grouping) = (set.to_string(), grouping.to_string());
        Some(self.working.list_order(self.records, &set, &grouping))
    }

    /// Move one value within a flat dimension's order.
    pub fn move_flat(&mut self, dimension: FlatDimension, item: &str, target_index: usize) -> bool {
        relocate(
            self.working.flat_order_mut(dimension),
            &item.to_string(),
            target_index,
        )
    }

    /// Move one value within the Set order.
    pub fn move_set(&mut self, item: &str, target_index: usize) -> bool {
        relocate(self.working.set_order_mut(), &item.to_string(), target_index)
    }

    /// Move one value within the focused Set's Grouping order.
    ///
    /// A drop with no Set focused is stale by definition and is ignored.
    pub fn move_grouping(&mut self, item: &str, target_index: usize) -> bool {
        let Some(set) = self.selection.set().map(str::to_string) else {
            debug!(item, "ignoring grouping move without a focused set");
            return false;
        };
        relocate(
            self.working.grouping_order_mut(self.records, &set),
            &item.to_string(),
            target_index,
        )
    }

    /// Move one value within the focused pair's List order.
    pub fn move_list(&mut self, item: &str, target_index: usize) -> bool {
        let Some((set, grouping)) = self
            .selection
            .pair()
            .map(|(s, g)| (s.to_string(), g.to_string()))
        else {
            debug!(item, "ignoring list move without a focused grouping");
            return false;
        };
        relocate(
            self.working.list_order_mut(self.records, &set, &grouping),
            &item.to_string(),
            target_index,
        )
    }

    /// Package the session's working orders into one document for saving.
    pub fn commit(self) -> OrderDocument {
        self.working.into_document(self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_the_same_set_twice_toggles_off() {
        let selection = Selection::None.select_set("Geography");
        assert_eq!(selection, Selection::Set("Geography".to_string()));
        assert_eq!(selection.select_set("Geography"), Selection::None);
    }

    #[test]
    fn changing_set_clears_the_grouping() {
        let selection = Selection::None
            .select_set("Geography")
            .select_grouping("GICS");
        assert_eq!(selection.pair(), Some(("Geography", "GICS")));
        let switched = selection.select_set("Products");
        assert_eq!(switched, Selection::Set("Products".to_string()));
    }

    #[test]
    fn reselecting_the_grouping_drops_back_to_the_set() {
        let selection = Selection::None
            .select_set("Geography")
            .select_grouping("GICS")
            .select_grouping("GICS");
        assert_eq!(selection, Selection::Set("Geography".to_string()));
    }

    #[test]
    fn grouping_click_without_a_set_is_ignored() {
        assert_eq!(Selection::None.select_grouping("GICS"), Selection::None);
    }

    #[test]
    fn toggling_off_a_pair_by_reclicking_its_set() {
        let selection = Selection::None
            .select_set("Geography")
            .select_grouping("GICS")
            .select_set("Geography");
        assert_eq!(selection, Selection::None);
    }
}
