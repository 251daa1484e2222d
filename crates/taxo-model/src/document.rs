//! The persisted order document.
//!
//! An [`OrderDocument`] is the whole saved state of the ordering subsystem:
//! one order per flat dimension, the Level-1 (Set) order, a Level-2 order per
//! Set value, and a Level-3 order per `"Set|Grouping"` composite key. The
//! core treats it as an opaque structure handed to and returned from the
//! persistence collaborator; it carries no knowledge of the storage medium.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::FlatDimension;

/// Separator for Level-3 composite scope keys.
pub const SCOPE_KEY_SEPARATOR: char = '|';

/// Build the composite key a Level-3 order is stored under.
pub fn scope_key(set: &str, grouping: &str) -> String {
    format!("{set}{SCOPE_KEY_SEPARATOR}{grouping}")
}

/// Split a composite key back into its (set, grouping) parts.
///
/// Returns `None` for keys without a separator. Set values containing the
/// separator character are not supported; the first occurrence splits.
pub fn split_scope_key(key: &str) -> Option<(&str, &str)> {
    key.split_once(SCOPE_KEY_SEPARATOR)
}

/// The full persisted ordering state.
///
/// Every order is a sequence of distinct values. A scoped order should only
/// name a scope that at least one dataset record currently inhabits; the
/// working order enforces this when it packages a document for saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDocument {
    /// Flat dimension orders.
    #[serde(rename = "sectorOrder")]
    pub sectors: Vec<String>,
    #[serde(rename = "domainOrder")]
    pub domains: Vec<String>,
    #[serde(rename = "countryOrder")]
    pub countries: Vec<String>,
    /// Level-1 order.
    #[serde(rename = "level1Order")]
    pub sets: Vec<String>,
    /// Level-2 orders, keyed by Set value.
    #[serde(rename = "level2Orders")]
    pub groupings: BTreeMap<String, Vec<String>>,
    /// Level-3 orders, keyed by `"Set|Grouping"`.
    #[serde(rename = "level3Orders")]
    pub lists: BTreeMap<String, Vec<String>>,
}

impl OrderDocument {
    /// An empty document: the state before any order was ever saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been ordered yet.
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
            && self.domains.is_empty()
            && self.countries.is_empty()
            && self.sets.is_empty()
            && self.groupings.is_empty()
            && self.lists.is_empty()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_key_round_trips() {
        let key = scope_key("Geography", "GICS");
        assert_eq!(key, "Geography|GICS");
        assert_eq!(split_scope_key(&key), Some(("Geography", "GICS")));
        assert_eq!(split_scope_key("no-separator"), None);
    }

    #[test]
    fn empty_document_is_empty() {
        let document = OrderDocument::new();
        assert!(document.is_empty());

        let mut with_sets = OrderDocument::new();
        with_sets.sets.push("Geography".to_string());
        assert!(!with_sets.is_empty());
    }

    #[test]
    fn document_serializes_with_wire_field_names() {
        let mut document = OrderDocument::new();
        document.sets.push("Geography".to_string());
        document
            .groupings
            .insert("Geography".to_string(), vec!["GICS".to_string()]);
        let json = serde_json::to_string(&document).expect("serialize document");
        assert!(json.contains("\"level1Order\""));
        assert!(json.contains("\"level2Orders\""));
        let round: OrderDocument = serde_json::from_str(&json).expect("deserialize document");
        assert_eq!(round, document);
    }

    #[test]
    fn flat_orders_are_addressable_by_dimension() {
        let mut document = OrderDocument::new();
        document
            .flat_order_mut(FlatDimension::Country)
            .push("IE".to_string());
        assert_eq!(document.flat_order(FlatDimension::Country), ["IE"]);
        assert!(document.flat_order(FlatDimension::Sector).is_empty());
    }
}
