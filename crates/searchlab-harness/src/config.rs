//! Sweep configuration and validation.
//!
//! [`SweepConfig`] holds everything a [`Sweep`](crate::Sweep) needs apart
//! from the suite and the clock. [`validate()`](SweepConfig::validate)
//! checks it before any array is allocated.

use std::error::Error;
use std::fmt;

use searchlab_core::{PcgSeed, SeedError};

use crate::cache::CachePolicy;
use crate::timing::Statistic;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SweepConfig::validate()`] or sweep setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_len` is greater than `max_len`.
    EmptyRange {
        /// Configured lower bound.
        min_len: usize,
        /// Configured upper bound.
        max_len: usize,
    },
    /// `query_count` is zero.
    ZeroQueries,
    /// No cache policy selected.
    NoCachePolicies,
    /// `cache_passes` is zero.
    ZeroCachePasses,
    /// The suite has no variants.
    EmptySuite,
    /// The generator seed is invalid.
    Seed(SeedError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { min_len, max_len } => {
                write!(f, "min_len {min_len} is greater than max_len {max_len}")
            }
            Self::ZeroQueries => write!(f, "query_count must be at least 1"),
            Self::NoCachePolicies => write!(f, "no cache policy selected"),
            Self::ZeroCachePasses => write!(f, "cache_passes must be at least 1"),
            Self::EmptySuite => write!(f, "search suite is empty"),
            Self::Seed(e) => write!(f, "seed: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Seed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SeedError> for ConfigError {
    fn from(e: SeedError) -> Self {
        Self::Seed(e)
    }
}

// ── SweepConfig ────────────────────────────────────────────────────

/// Parameters of one sweep over array sizes.
///
/// The default is the reference run: sizes 1 to 64, 100 queries, the
/// default PCG seed, two flush passes before every call, mean reported.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Smallest array size swept. Default: 1.
    pub min_len: usize,
    /// Largest array size swept (inclusive). Default: 64.
    pub max_len: usize,
    /// Number of lookup keys, shared by every size. Default: 100.
    pub query_count: usize,
    /// Generator seed for both keys and arrays. Default: [`PcgSeed::DEFAULT`].
    pub seed: PcgSeed,
    /// Cache states to time under, in report order. Default: `[Flush]`.
    pub cache_policies: Vec<CachePolicy>,
    /// Times the cache policy is applied before each call. Default: 2.
    pub cache_passes: u32,
    /// Summary printed per row. Default: [`Statistic::Mean`].
    pub statistic: Statistic,
    /// Run the checker on every size before timing. Default: false.
    pub verify: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: 64,
            query_count: 100,
            seed: PcgSeed::DEFAULT,
            cache_policies: vec![CachePolicy::Flush],
            cache_passes: 2,
            statistic: Statistic::Mean,
            verify: false,
        }
    }
}

impl SweepConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len > self.max_len {
            return Err(ConfigError::EmptyRange {
                min_len: self.min_len,
                max_len: self.max_len,
            });
        }
        if self.query_count == 0 {
            return Err(ConfigError::ZeroQueries);
        }
        if self.cache_policies.is_empty() {
            return Err(ConfigError::NoCachePolicies);
        }
        if self.cache_passes == 0 {
            return Err(ConfigError::ZeroCachePasses);
        }
        Ok(())
    }

    /// Array sizes swept, in order.
    pub fn sizes(&self) -> std::ops::RangeInclusive<usize> {
        self.min_len..=self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SweepConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.sizes().count(), 64);
        assert_eq!(cfg.cache_policies, [CachePolicy::Flush]);
    }

    #[test]
    fn single_size_is_valid() {
        let cfg = SweepConfig {
            min_len: 0,
            max_len: 0,
            ..SweepConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.sizes().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn inverted_range_rejected() {
        let cfg = SweepConfig {
            min_len: 10,
            max_len: 9,
            ..SweepConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::EmptyRange {
                min_len: 10,
                max_len: 9
            })
        );
    }

    #[test]
    fn zero_counts_rejected() {
        let cfg = SweepConfig {
            query_count: 0,
            ..SweepConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroQueries));

        let cfg = SweepConfig {
            cache_passes: 0,
            ..SweepConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCachePasses));

        let cfg = SweepConfig {
            cache_policies: Vec::new(),
            ..SweepConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoCachePolicies));
    }

    #[test]
    fn seed_error_converts_and_chains() {
        let err: ConfigError = PcgSeed::new(1, 2).unwrap_err().into();
        assert!(matches!(err, ConfigError::Seed(_)));
        assert!(err.to_string().starts_with("seed: "));
        assert!(err.source().is_some());
        assert!(ConfigError::ZeroQueries.source().is_none());
    }
}
