//! Reusable haystacks, broken searchers, and strategies.
//!
//! The broken searchers each violate the insertion-point contract in one
//! specific way, so checker tests can assert on the exact violation kind:
//!
//! - [`wrong_match`]: reports a match at index 0 whatever the key.
//! - [`found_past_end`]: reports a match one past the end.
//! - [`insert_one_early`]: misses report `ip - 1`.
//! - [`insert_one_late`]: misses report `ip + 1`.

use proptest::prelude::*;
use searchlab_core::{Key, SearchResult};

/// Small sorted haystack with a duplicate run.
pub const SCENARIO: [Key; 5] = [3, 7, 7, 9, 15];

fn reference(haystack: &[Key], key: Key) -> SearchResult {
    let ip = haystack.partition_point(|&v| v < key);
    if haystack.get(ip) == Some(&key) {
        SearchResult::found(ip)
    } else {
        SearchResult::insert_at(ip)
    }
}

pub fn wrong_match(haystack: &[Key], _key: Key) -> SearchResult {
    if haystack.is_empty() {
        return SearchResult::insert_at(0);
    }
    SearchResult::found(0)
}

pub fn found_past_end(haystack: &[Key], _key: Key) -> SearchResult {
    SearchResult::found(haystack.len())
}

pub fn insert_one_early(haystack: &[Key], key: Key) -> SearchResult {
    let r = reference(haystack, key);
    match r.insertion_point() {
        Some(ip) => SearchResult::insert_at(ip.saturating_sub(1)),
        None => r,
    }
}

pub fn insert_one_late(haystack: &[Key], key: Key) -> SearchResult {
    let r = reference(haystack, key);
    match r.insertion_point() {
        Some(ip) => SearchResult::insert_at(ip + 1),
        None => r,
    }
}

/// Oracle for the insertion-point contract, independent of the harness
/// checker. Returns a description of the first broken rule.
pub fn check_contract(haystack: &[Key], key: Key, result: SearchResult) -> Result<(), String> {
    if let Some(i) = result.index() {
        return match haystack.get(i) {
            Some(&v) if v == key => Ok(()),
            other => Err(format!("index {i} holds {other:?}, wanted {key}")),
        };
    }
    let ip = result.insertion_point().unwrap_or_default();
    if ip > haystack.len() {
        return Err(format!("insertion point {ip} past len {}", haystack.len()));
    }
    if haystack.contains(&key) {
        return Err(format!("{key} is present but reported missing (ip {ip})"));
    }
    if ip < haystack.len() && haystack[ip] <= key {
        return Err(format!("haystack[{ip}] = {} not above {key}", haystack[ip]));
    }
    if ip > 0 && haystack[ip - 1] >= key {
        return Err(format!("haystack[{}] = {} not below {key}", ip - 1, haystack[ip - 1]));
    }
    Ok(())
}

/// Sorted haystacks up to `max_len` long. Half of them draw from a narrow
/// value range so duplicates and hits are common.
pub fn arb_sorted_haystack(max_len: usize) -> impl Strategy<Value = Vec<Key>> {
    prop_oneof![
        prop::collection::vec(any::<Key>(), 0..=max_len),
        prop::collection::vec(0u16..48, 0..=max_len),
    ]
    .prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Lookup keys, biased towards the narrow range used by
/// [`arb_sorted_haystack`].
pub fn arb_query() -> impl Strategy<Value = Key> {
    prop_oneof![any::<Key>(), 0u16..50, Just(0), Just(Key::MAX)]
}
