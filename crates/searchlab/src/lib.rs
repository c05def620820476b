//! Searchlab: a microbenchmark of search strategies over small sorted
//! `u16` arrays.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all searchlab sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use searchlab::prelude::*;
//!
//! // Sizes 1 to 8, timed with the portable clock, cache left alone.
//! let config = SweepConfig {
//!     max_len: 8,
//!     cache_policies: vec![CachePolicy::Untouched],
//!     ..SweepConfig::default()
//! };
//! let sweep = Sweep::new(config, SearchSuite::standard(), WallClock::new()).unwrap();
//!
//! let mut report = Vec::new();
//! let summary = sweep.run(&mut report).unwrap();
//! assert_eq!(summary.sizes, 8);
//!
//! let text = String::from_utf8(report).unwrap();
//! assert!(text.starts_with("# Objective: fast search in 16-bit arrays of up to 8 integers."));
//! assert!(text.contains("[branchless_binary_search untouched] "));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `searchlab-core` | PCG32, data generators, result encoding, capability traits |
//! | [`search`] | `searchlab-search` | Linear and binary searches, the variant suite |
//! | [`harness`] | `searchlab-harness` | Cache control, cycle clocks, timing, checker, sweep |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`searchlab-core`).
///
/// Contains [`types::Pcg32`], the array generators, [`types::SearchResult`]
/// and the [`types::CacheControl`] / [`types::CycleClock`] capabilities.
pub use searchlab_core as types;

/// Search strategies (`searchlab-search`).
///
/// [`search::linear_search`], [`search::branchless_binary_search`],
/// [`search::binary_search`] and the equality-only
/// [`search::equality_linear_search`], plus [`search::SearchSuite`].
pub use searchlab_search as search;

/// Timing harness (`searchlab-harness`).
///
/// Cache policies, clocks, [`harness::time_search`], the contract checker
/// and the [`harness::Sweep`] driver.
pub use searchlab_harness as harness;

/// Common imports for typical searchlab usage.
///
/// ```rust
/// use searchlab::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use searchlab_core::{
        CacheControl, CycleClock, Key, Lookup, MatchResult, Pcg32, PcgSeed, SearchResult,
    };

    // Searches
    pub use searchlab_search::{
        binary_search, branchless_binary_search, equality_linear_search, linear_search,
        SearchSuite, SearchVariant,
    };

    // Harness
    pub use searchlab_harness::{
        default_clock, time_search, verify_search, CachePolicy, Statistic, Sweep, SweepConfig,
        SweepSummary, SystemClock, TimingStats, Violation, WallClock,
    };

    // Errors
    pub use searchlab_core::{DataError, SeedError};
    pub use searchlab_harness::{ConfigError, HarnessError};
    pub use searchlab_search::SuiteError;
}
