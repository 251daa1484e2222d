//! Distinct-value extraction from the live dataset.
//!
//! The values a dimension can be ordered over are only discoverable by
//! scanning the dataset, so reconciliation always starts here. Extraction is
//! a pure function of the records and accessors passed in; nothing is read
//! from ambient state.

use std::collections::BTreeSet;

use taxo_model::Record;

/// Distinct non-empty values of one field, sorted lexicographically
/// (case-sensitive, locale-naive) ascending.
pub fn distinct_values<'a, F>(records: &'a [Record], accessor: F) -> BTreeSet<String>
where
    F: Fn(&'a Record) -> &'a str,
{
    records
        .iter()
        .map(accessor)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct non-empty values of one field among records matching a scope
/// filter, e.g. Grouping values restricted to records of one Set.
pub fn distinct_values_where<'a, P, F>(
    records: &'a [Record],
    filter: P,
    accessor: F,
) -> BTreeSet<String>
where
    P: Fn(&'a Record) -> bool,
    F: Fn(&'a Record) -> &'a str,
{
    records
        .iter()
        .filter(|record| filter(record))
        .map(accessor)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .collect()
}
