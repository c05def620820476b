//! Timing harness for searchlab.
//!
//! Puts a haystack into a chosen cache state, times one search call at a
//! time with a serializing counter, and sweeps array sizes to produce a
//! gnuplot-ready report. Also hosts the insertion-point contract checker.
//!
//! - [`arch`]: the per-target intrinsics (the only `unsafe` in the workspace)
//! - [`cache`]: [`Flush`], [`Prefetch`], [`Untouched`] and [`CachePolicy`]
//! - [`clock`]: `Tsc` (x86_64), [`WallClock`] and [`SystemClock`]
//! - [`timing`]: [`time_search`] and its [`TimingStats`]
//! - [`verify`]: [`verify_search`] and [`Violation`]
//! - [`sweep`]: the [`Sweep`] driver and its [`SweepConfig`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arch;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod sweep;
pub mod timing;
pub mod verify;

pub use cache::{CachePolicy, Flush, Prefetch, Untouched};
#[cfg(target_arch = "x86_64")]
pub use clock::Tsc;
pub use clock::{default_clock, SystemClock, WallClock};
pub use config::{ConfigError, SweepConfig};
pub use error::HarnessError;
pub use sweep::{SizeViolation, Sweep, SweepRow, SweepSummary};
pub use timing::{time_search, time_variant, Bogus, Statistic, TimingStats};
pub use verify::{check_result, verify_search, verify_suite, VerifyOutcome, Violation};
