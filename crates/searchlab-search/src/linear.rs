//! Left-to-right scans.

use searchlab_core::{Key, MatchResult, SearchResult};

/// Scan until the first element `>= key`.
///
/// Returns its index if it equals `key`, otherwise the encoded insertion
/// point at that position (or `haystack.len()` if every element is
/// smaller).
#[inline(never)]
pub fn linear_search(haystack: &[Key], key: Key) -> SearchResult {
    for (i, &v) in haystack.iter().enumerate() {
        if v >= key {
            return if v == key {
                SearchResult::found(i)
            } else {
                SearchResult::insert_at(i)
            };
        }
    }
    SearchResult::insert_at(haystack.len())
}

/// Scan for an element equal to `key`, ignoring order.
///
/// Any miss is [`MatchResult::MISS`]; the insertion point is lost. Only
/// useful when the caller does not care where an absent key would go.
#[inline(never)]
pub fn equality_linear_search(haystack: &[Key], key: Key) -> MatchResult {
    haystack
        .iter()
        .position(|&v| v == key)
        .map_or(MatchResult::MISS, MatchResult::found)
}
