//! Sweep profiles and utilities for the searchlab drivers and benchmarks.
//!
//! Provides pre-built [`SweepConfig`] profiles:
//!
//! - [`reference_sweep`]: sizes 1 to 64, 100 queries, flushed cache, mean
//! - [`cache_comparison_sweep`]: same sizes under every cache policy, minimum
//!
//! and [`init_tracing`] for the binaries.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use searchlab_harness::{CachePolicy, Statistic, SweepConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// The reference run: what `searchlab-sweep` prints.
pub fn reference_sweep() -> SweepConfig {
    SweepConfig::default()
}

/// Flushed vs prefetched vs untouched, reporting the minimum per row so
/// interrupts and migrations do not blur the cache effect.
pub fn cache_comparison_sweep() -> SweepConfig {
    SweepConfig {
        cache_policies: CachePolicy::ALL.to_vec(),
        statistic: Statistic::Min,
        ..SweepConfig::default()
    }
}

/// Install a `fmt` subscriber on stderr, filtered by `RUST_LOG`
/// (default `info`). Stdout is left to the report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
