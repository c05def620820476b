//! Binary searches: classic branching and branchless.

use std::cmp::Ordering;

use searchlab_core::{Key, SearchResult};

/// Classic binary search over `[low, high)`.
///
/// With duplicates, any one of the equal elements may be returned.
#[inline(never)]
pub fn binary_search(haystack: &[Key], key: Key) -> SearchResult {
    let mut low = 0usize;
    let mut high = haystack.len();
    while low < high {
        let mid = low + ((high - low) >> 1);
        match haystack[mid].cmp(&key) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return SearchResult::found(mid),
        }
    }
    SearchResult::insert_at(low)
}

/// Branchless lower-bound search (Khuong & Morin, arXiv:1509.05053).
///
/// The loop narrows `(base, n)` by halves and picks the next base with a
/// select on the comparison instead of a branch, so the iteration count
/// depends only on `haystack.len()`. Keys above the last element are
/// answered before the loop; the final `base` step would otherwise land
/// one past the end. Returns the first equal element on a match.
#[inline(never)]
pub fn branchless_binary_search(haystack: &[Key], key: Key) -> SearchResult {
    let len = haystack.len();
    let Some(&last) = haystack.last() else {
        return SearchResult::insert_at(0);
    };
    if key > last {
        return SearchResult::insert_at(len);
    }
    let mut base = 0usize;
    let mut n = len;
    while n > 1 {
        let half = n >> 1;
        // base + n <= len holds throughout, so base + half < len.
        base = if haystack[base + half] < key { base + half } else { base };
        n -= half;
    }
    base += (haystack[base] < key) as usize;
    if haystack[base] == key {
        SearchResult::found(base)
    } else {
        SearchResult::insert_at(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlab_test_utils::fixtures::SCENARIO;

    #[test]
    fn binary_scenario() {
        let hit = binary_search(&SCENARIO, 7).index().unwrap();
        assert!(hit == 1 || hit == 2);
        assert_eq!(binary_search(&SCENARIO, 5).insertion_point(), Some(1));
        assert_eq!(binary_search(&SCENARIO, 20).insertion_point(), Some(5));
        assert_eq!(binary_search(&SCENARIO, 1).insertion_point(), Some(0));
    }

    #[test]
    fn branchless_scenario() {
        assert_eq!(branchless_binary_search(&SCENARIO, 7).index(), Some(1));
        assert_eq!(branchless_binary_search(&SCENARIO, 5).insertion_point(), Some(1));
        assert_eq!(branchless_binary_search(&SCENARIO, 20).insertion_point(), Some(5));
        assert_eq!(branchless_binary_search(&SCENARIO, 1).insertion_point(), Some(0));
        assert_eq!(branchless_binary_search(&SCENARIO, 15).index(), Some(4));
    }

    #[test]
    fn empty_haystack() {
        assert_eq!(binary_search(&[], 42).raw(), -1);
        assert_eq!(branchless_binary_search(&[], 42).raw(), -1);
    }

    #[test]
    fn single_element() {
        for f in [binary_search as fn(&[Key], Key) -> SearchResult, branchless_binary_search] {
            assert_eq!(f(&[10], 10).index(), Some(0));
            assert_eq!(f(&[10], 9).insertion_point(), Some(0));
            assert_eq!(f(&[10], 11).insertion_point(), Some(1));
        }
    }

    #[test]
    fn extreme_keys() {
        let hay = [0u16, 0, 1, u16::MAX - 1, u16::MAX];
        assert_eq!(branchless_binary_search(&hay, 0).index(), Some(0));
        assert_eq!(branchless_binary_search(&hay, u16::MAX).index(), Some(4));
        assert_eq!(branchless_binary_search(&hay, 2).insertion_point(), Some(3));
        assert_eq!(binary_search(&hay, u16::MAX).index(), Some(4));
        assert_eq!(binary_search(&hay, 2).insertion_point(), Some(3));
    }

    #[test]
    fn all_equal_haystack() {
        let hay = [5u16; 33];
        assert_eq!(branchless_binary_search(&hay, 5).index(), Some(0));
        assert_eq!(binary_search(&hay, 4).insertion_point(), Some(0));
        assert_eq!(binary_search(&hay, 6).insertion_point(), Some(33));
        assert_eq!(branchless_binary_search(&hay, 6).insertion_point(), Some(33));
    }
}
