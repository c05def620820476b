//! Named, ordered registry of search variants.
//!
//! The harness iterates a [`SearchSuite`] in registration order, which is
//! also the order of rows in the printed report.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use searchlab_core::Key;

use crate::{MatchFn, SearchFn};

/// One search strategy under test.
#[derive(Clone, Copy, Debug)]
pub enum SearchVariant {
    /// Returns a match index or an insertion point.
    Ordered(SearchFn),
    /// Returns a match index or `-1`. Not checkable against the
    /// insertion-point contract.
    EqualityOnly(MatchFn),
}

impl SearchVariant {
    /// Run the search and return the raw encoded result.
    #[inline(always)]
    pub fn call_raw(&self, haystack: &[Key], key: Key) -> isize {
        match self {
            Self::Ordered(f) => f(haystack, key).raw(),
            Self::EqualityOnly(f) => f(haystack, key).raw(),
        }
    }

    /// The contract-preserving function, if this variant has one.
    pub fn as_ordered(&self) -> Option<SearchFn> {
        match self {
            Self::Ordered(f) => Some(*f),
            Self::EqualityOnly(_) => None,
        }
    }
}

/// Errors from building a [`SearchSuite`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuiteError {
    /// Two variants were registered under the same name.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "search variant '{name}' registered twice"),
        }
    }
}

impl Error for SuiteError {}

/// Ordered set of uniquely named search variants.
#[derive(Clone, Debug, Default)]
pub struct SearchSuite {
    variants: IndexMap<String, SearchVariant>,
}

impl SearchSuite {
    /// An empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four reference strategies, in report order:
    /// linear, equality-only linear, branchless binary, classic binary.
    pub fn standard() -> Self {
        let mut suite = Self::new();
        suite.variants.insert(
            "linear_search".to_string(),
            SearchVariant::Ordered(crate::linear_search),
        );
        suite.variants.insert(
            "equality_linear_search".to_string(),
            SearchVariant::EqualityOnly(crate::equality_linear_search),
        );
        suite.variants.insert(
            "branchless_binary_search".to_string(),
            SearchVariant::Ordered(crate::branchless_binary_search),
        );
        suite.variants.insert(
            "binary_search".to_string(),
            SearchVariant::Ordered(crate::binary_search),
        );
        suite
    }

    /// Register a contract-preserving search.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::DuplicateName`] if `name` is taken.
    pub fn add_ordered(&mut self, name: impl Into<String>, f: SearchFn) -> Result<(), SuiteError> {
        self.add(name.into(), SearchVariant::Ordered(f))
    }

    /// Register an equality-only search.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::DuplicateName`] if `name` is taken.
    pub fn add_equality_only(
        &mut self,
        name: impl Into<String>,
        f: MatchFn,
    ) -> Result<(), SuiteError> {
        self.add(name.into(), SearchVariant::EqualityOnly(f))
    }

    fn add(&mut self, name: String, variant: SearchVariant) -> Result<(), SuiteError> {
        if self.variants.contains_key(&name) {
            return Err(SuiteError::DuplicateName { name });
        }
        self.variants.insert(name, variant);
        Ok(())
    }

    /// Look up a variant by name.
    pub fn get(&self, name: &str) -> Option<&SearchVariant> {
        self.variants.get(name)
    }

    /// Iterate `(name, variant)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SearchVariant)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate only the contract-preserving variants.
    pub fn ordered(&self) -> impl Iterator<Item = (&str, SearchFn)> {
        self.iter()
            .filter_map(|(name, v)| v.as_ordered().map(|f| (name, f)))
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether no variant is registered.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlab_core::{MatchResult, SearchResult};

    fn always_zero(_: &[Key], _: Key) -> SearchResult {
        SearchResult::found(0)
    }

    #[test]
    fn standard_order() {
        let suite = SearchSuite::standard();
        let names: Vec<&str> = suite.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            [
                "linear_search",
                "equality_linear_search",
                "branchless_binary_search",
                "binary_search",
            ]
        );
    }

    #[test]
    fn ordered_skips_equality_only() {
        let suite = SearchSuite::standard();
        let names: Vec<&str> = suite.ordered().map(|(n, _)| n).collect();
        assert_eq!(names, ["linear_search", "branchless_binary_search", "binary_search"]);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut suite = SearchSuite::new();
        suite.add_ordered("zero", always_zero).unwrap();
        assert_eq!(
            suite.add_ordered("zero", always_zero),
            Err(SuiteError::DuplicateName {
                name: "zero".to_string()
            })
        );
        assert_eq!(suite.len(), 1);
    }

    #[test]
    fn call_raw_dispatches() {
        let suite = SearchSuite::standard();
        let hay = [1u16, 3, 5];
        let eq = suite.get("equality_linear_search").unwrap();
        assert_eq!(eq.call_raw(&hay, 4), MatchResult::MISS.raw());
        let lin = suite.get("linear_search").unwrap();
        assert_eq!(lin.call_raw(&hay, 4), SearchResult::insert_at(2).raw());
        assert!(eq.as_ordered().is_none());
    }

    #[test]
    fn empty_suite() {
        let suite = SearchSuite::new();
        assert!(suite.is_empty());
        assert!(suite.get("linear_search").is_none());
    }
}
