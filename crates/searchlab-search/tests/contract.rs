//! Integration test: insertion-point contract across all strategies.
//!
//! Every contract-preserving strategy must, for any sorted haystack and
//! any key, return either an index holding the key or an insertion point
//! that keeps the haystack sorted. Small haystacks are checked against
//! every possible `u16` key; larger ones by property testing.

use proptest::prelude::*;
use searchlab_core::{Key, Pcg32, PcgSeed};
use searchlab_search::{
    binary_search, branchless_binary_search, equality_linear_search, linear_search, SearchFn,
    SearchSuite,
};
use searchlab_test_utils::{arb_query, arb_sorted_haystack, check_contract, SCENARIO};

const ORDERED: [(&str, SearchFn); 3] = [
    ("linear_search", linear_search),
    ("branchless_binary_search", branchless_binary_search),
    ("binary_search", binary_search),
];

#[test]
fn every_key_on_generated_haystacks() {
    let mut rng = Pcg32::new(PcgSeed::DEFAULT);
    // Lengths straddle the 32-element cache-line stride.
    for len in [0, 1, 2, 3, 5, 8, 13, 21, 31, 32, 33, 64] {
        let haystack = searchlab_core::sorted_array(&mut rng, len).unwrap();
        for key in 0..=Key::MAX {
            for (name, f) in ORDERED {
                if let Err(msg) = check_contract(&haystack, key, f(&haystack, key)) {
                    panic!("{name} len={len} key={key}: {msg}");
                }
            }
        }
    }
}

#[test]
fn scenario_edges() {
    for (name, f) in ORDERED {
        let hit = f(&SCENARIO, 7).index();
        assert!(matches!(hit, Some(1) | Some(2)), "{name}: {hit:?}");
        assert_eq!(f(&SCENARIO, 5).insertion_point(), Some(1), "{name}");
        assert_eq!(f(&SCENARIO, 20).insertion_point(), Some(5), "{name}");
        assert_eq!(f(&SCENARIO, 1).insertion_point(), Some(0), "{name}");
        assert_eq!(f(&[], 1).raw(), -1, "{name}");
    }
}

#[test]
fn standard_suite_matches_free_functions() {
    let suite = SearchSuite::standard();
    for (name, f) in ORDERED {
        let variant = suite.get(name).unwrap();
        for key in [0, 3, 7, 8, 15, 16, Key::MAX] {
            assert_eq!(variant.call_raw(&SCENARIO, key), f(&SCENARIO, key).raw());
        }
    }
}

proptest! {
    #[test]
    fn ordered_strategies_agree_on_membership(
        haystack in arb_sorted_haystack(300),
        key in arb_query(),
    ) {
        let expected = haystack.binary_search(&key).is_ok();
        for (name, f) in ORDERED {
            let r = f(&haystack, key);
            prop_assert!(check_contract(&haystack, key, r).is_ok(), "{} broke contract", name);
            prop_assert_eq!(r.index().is_some(), expected, "{}", name);
        }
        // Misses all agree on the insertion point.
        if !expected {
            let ip = haystack.partition_point(|&v| v < key);
            for (name, f) in ORDERED {
                prop_assert_eq!(f(&haystack, key).insertion_point(), Some(ip), "{}", name);
            }
        }
    }

    #[test]
    fn equality_only_finds_exactly_the_present_keys(
        haystack in arb_sorted_haystack(128),
        key in arb_query(),
    ) {
        let r = equality_linear_search(&haystack, key);
        match r.index() {
            Some(i) => prop_assert_eq!(haystack[i], key),
            None => {
                prop_assert!(!haystack.contains(&key));
                prop_assert_eq!(r.raw(), -1);
            }
        }
    }
}
