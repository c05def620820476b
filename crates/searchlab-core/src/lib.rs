//! Core types for the searchlab search microbenchmark.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces every other searchlab crate builds on:
//!
//! - [`Pcg32`]: the deterministic generator behind all synthetic data
//! - [`sorted_array`] / [`random_array`]: haystack and query generators
//! - [`SearchResult`] / [`MatchResult`]: the encoded return values of
//!   search functions
//! - [`CacheControl`] / [`CycleClock`]: the capabilities the timing
//!   harness is generic over
//! - error types for seeding and allocation failures

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod data;
pub mod error;
pub mod result;
pub mod rng;
pub mod traits;

pub use data::{random_array, sorted_array};
pub use error::{DataError, SeedError};
pub use result::{Lookup, MatchResult, SearchResult};
pub use rng::{Pcg32, PcgSeed};
pub use traits::{CacheControl, CycleClock};

/// Element type of every haystack and query batch.
pub type Key = u16;
