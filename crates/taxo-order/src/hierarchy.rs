//! The working order: reconciled, in-session, possibly-edited orders for
//! every dimension.
//!
//! Flat orders and the Level-1 (Set) order are reconciled eagerly when the
//! working order is built. Level-2 and Level-3 orders are reconciled lazily,
//! on the first access to their scope, and cached for the rest of the
//! session. An absent cache entry means the scope has not been loaded yet; a
//! present entry is authoritative until commit.

use std::collections::BTreeMap;

use tracing::debug;

use taxo_model::{FlatDimension, OrderDocument, Record, scope_key, split_scope_key};

use crate::extract::{distinct_values, distinct_values_where};
use crate::reconcile::reconcile;

/// In-memory, possibly-edited copy of the order document for one editing
/// session. Diverges from the last-saved document until [`Self::into_document`]
/// packages it for saving; dropping it abandons the edits.
#[derive(Debug, Clone)]
pub struct WorkingOrder {
    sectors: Vec<String>,
    domains: Vec<String>,
    countries: Vec<String>,
    sets: Vec<String>,
    /// Lazily reconciled Level-2 orders, keyed by Set value.
    groupings: BTreeMap<String, Vec<String>>,
    /// Lazily reconciled Level-3 orders, keyed by `"Set|Grouping"`.
    lists: BTreeMap<String, Vec<String>>,
    /// The document this session started from; seeds lazy reconciliation and
    /// carries scopes never opened this session through to commit.
    saved: OrderDocument,
}

impl WorkingOrder {
    /// Reconcile a saved document against the live dataset.
    ///
    /// Flat orders and the Set order are reconciled now; scoped orders wait
    /// for their first access.
    pub fn reconcile(saved: OrderDocument, records: &[Record]) -> Self {
        let sectors = reconcile(
            &saved.sectors,
            &distinct_values(records, |r| r.sector.as_str()),
        );
        let domains = reconcile(
            &saved.domains,
            &distinct_values(records, |r| r.domain.as_str()),
        );
        let countries = reconcile(
            &saved.countries,
            &distinct_values(records, |r| r.country.as_str()),
        );
        let sets = reconcile(&saved.sets, &distinct_values(records, |r| r.set.as_str()));
        Self {
            sectors,
            domains,
            countries,
            sets,
            groupings: BTreeMap::new(),
            lists: BTreeMap::new(),
            saved,
        }
    }

    pub fn flat_order(&self, dimension: FlatDimension) -> &[String] {
        match dimension {
            FlatDimension::Sector => &self.sectors,
            FlatDimension::Domain => &self.domains,
            FlatDimension::Country => &self.countries,
        }
    }

    pub fn flat_order_mut(&mut self, dimension: FlatDimension) -> &mut Vec<String> {
        match dimension {
            FlatDimension::Sector => &mut self.sectors,
            FlatDimension::Domain => &mut self.domains,
            FlatDimension::Country => &mut self.countries,
        }
    }

    /// Level-1 order across the whole dataset.
    pub fn set_order(&self) -> &[String] {
        &self.sets
    }

    pub fn set_order_mut(&mut self) -> &mut Vec<String> {
        &mut self.sets
    }

    /// True when the Level-2 order for `set` has been reconciled this session.
    pub fn grouping_loaded(&self, set: &str) -> bool {
        self.groupings.contains_key(set)
    }

    /// True when the Level-3 order for `(set, grouping)` has been reconciled
    /// this session.
    pub fn list_loaded(&self, set: &str, grouping: &str) -> bool {
        self.lists.contains_key(&scope_key(set, grouping))
    }

    /// Level-2 order for one Set, reconciled on first access against records
    /// of that Set only.
    pub fn grouping_order(&mut self, records: &[Record], set: &str) -> &[String] {
        self.ensure_grouping_loaded(records, set);
        self.groupings.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn grouping_order_mut(&mut self, records: &[Record], set: &str) -> &mut Vec<String> {
        self.ensure_grouping_loaded(records, set);
        self.groupings.entry(set.to_string()).or_default()
    }

    /// Level-3 order for one (Set, Grouping) pair, reconciled on first access
    /// against records of that pair only.
    pub fn list_order(&mut self, records: &[Record], set: &str, grouping: &str) -> &[String] {
        self.ensure_list_loaded(records, set, grouping);
        self.lists
            .get(&scope_key(set, grouping))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn list_order_mut(
        &mut self,
        records: &[Record],
        set: &str,
        grouping: &str,
    ) -> &mut Vec<String> {
        self.ensure_list_loaded(records, set, grouping);
        self.lists.entry(scope_key(set, grouping)).or_default()
    }

    fn ensure_grouping_loaded(&mut self, records: &[Record], set: &str) {
        if self.groupings.contains_key(set) {
            return;
        }
        let saved = self
            .saved
            .groupings
            .get(set)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let live = distinct_values_where(records, |r| r.set == set, |r| r.grouping.as_str());
        debug!(set, values = live.len(), "reconciling grouping order");
        self.groupings
            .insert(set.to_string(), reconcile(saved, &live));
    }

    fn ensure_list_loaded(&mut self, records: &[Record], set: &str, grouping: &str) {
        let key = scope_key(set, grouping);
        if self.lists.contains_key(&key) {
            return;
        }
        let saved = self.saved.lists.get(&key).map(Vec::as_slice).unwrap_or(&[]);
        let live = distinct_values_where(
            records,
            |r| r.set == set && r.grouping == grouping,
            |r| r.list.as_str(),
        );
        debug!(set, grouping, values = live.len(), "reconciling list order");
        self.lists.insert(key, reconcile(saved, &live));
    }

    /// Package every working order into one document for wholesale saving.
    ///
    /// Scopes reconciled this session are written as they stand, edits
    /// included. Scopes never opened carry through from the saved document
    /// unchanged; they reconcile on their next access. Scoped orders whose
    /// scope no longer exists in the dataset are pruned.
    pub fn into_document(self, records: &[Record]) -> OrderDocument {
        let mut groupings = self.saved.groupings;
        groupings.extend(self.groupings);
        groupings.retain(|set, _| self.sets.iter().any(|s| s == set));

        let mut lists = self.saved.lists;
        lists.extend(self.lists);
        lists.retain(|key, _| {
            split_scope_key(key).is_some_and(|(set, grouping)| {
                records.iter().any(|r| r.set == set && r.grouping == grouping)
            })
        });

        OrderDocument {
            sectors: self.sectors,
            domains: self.domains,
            countries: self.countries,
            sets: self.sets,
            groupings,
            lists,
        }
    }
}
