//! Search strategies over small sorted `u16` haystacks.
//!
//! Every contract-preserving strategy has the [`SearchFn`] shape and
//! returns a [`SearchResult`]: the index of an equal element, or the
//! encoded insertion point of the key. [`equality_linear_search`] is the
//! one exception; it only answers "is it here" and has its own
//! [`MatchFn`] shape so it cannot be mistaken for the others.
//!
//! [`SearchSuite`] holds a named, ordered set of variants for the harness.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binary;
pub mod linear;
pub mod suite;

pub use binary::{binary_search, branchless_binary_search};
pub use linear::{equality_linear_search, linear_search};
pub use suite::{SearchSuite, SearchVariant, SuiteError};

use searchlab_core::{Key, MatchResult, SearchResult};

/// Shape of a contract-preserving search.
pub type SearchFn = fn(&[Key], Key) -> SearchResult;

/// Shape of an equality-only search.
pub type MatchFn = fn(&[Key], Key) -> MatchResult;
