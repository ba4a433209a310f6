//! First-occurrence-wins deduplication
//!
//! Feed windows overlap: a request for one day returns all activity from
//! that day forward, so consecutive windows resend the same entries. The
//! aggregator collapses them here, keyed by each entry's stable identifier.

use std::collections::HashSet;
use std::hash::Hash;

/// An entry with a stable identifier, unique within one query
pub trait Identified {
    /// The identifier type
    type Ident: Eq + Hash;

    /// The entry's stable identifier
    fn ident(&self) -> Self::Ident;
}

/// Collapse a sequence to one entry per distinct identifier.
///
/// The first occurrence of each identifier is kept; later duplicates are
/// dropped. Relative order of the survivors matches the input. Applying
/// this twice is the same as applying it once.
pub fn unique_by_ident<T: Identified>(entries: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.ident()))
        .collect()
}
