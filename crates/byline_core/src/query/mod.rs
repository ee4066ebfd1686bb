//! Derived, read-only queries over a catalog.
//!
//! # Responsibility
//! - Compute uniqueness, grouping and counting views on demand.
//!
//! # Invariants
//! - Views borrow the catalog immutably and cache nothing.
//! - Deduplication is by entity id, never by name.
//! - `None` means "no data", distinct from an empty result.

pub mod creator;
pub mod publication;

use std::collections::BTreeSet;

/// Keeps the first occurrence of each key, preserving input order.
pub(crate) fn unique_by<T, K, I, F>(items: I, mut key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
