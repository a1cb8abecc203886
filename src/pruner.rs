use crate::dictionary::{Dictionary, WordEntry};
use crate::normalize::NormalizedQuery;

/// Default half-width of the canonical length window.
pub const DEFAULT_LENGTH_WINDOW: usize = 2;

/// Narrows the dictionary to entries sharing the query's first letter whose
/// canonical length lies within `query.len() ± window`. A truncated query has
/// no upper bound, since the gesture it came from was longer than it.
///
/// A match whose first letter was mis-sampled is never found; that is the
/// price of bucket lookups instead of a full scan.
pub fn candidates<'d>(
    query: &NormalizedQuery,
    dictionary: &'d Dictionary,
    window: usize,
) -> Vec<&'d WordEntry> {
    let Some(first) = query.first() else {
        return Vec::new();
    };

    let len = query.len();
    let lo = len.saturating_sub(window).max(1);
    let hi = if query.is_truncated() {
        dictionary.max_canonical_len()
    } else {
        (len + window).min(dictionary.max_canonical_len())
    };

    (lo..=hi)
        .flat_map(|l| dictionary.bucket(first, l))
        .collect()
}
