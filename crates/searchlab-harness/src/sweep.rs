//! Sweep driver: sizes × variants × cache policies, printed for gnuplot.
//!
//! One [`Pcg32`] feeds the whole run. The query batch is drawn first and
//! shared by every size; each size then draws a fresh sorted array, which
//! is dropped before the next size is generated.

use std::io::Write;

use searchlab_core::{random_array, sorted_array, CycleClock, Key, Pcg32};
use searchlab_search::SearchSuite;
use tracing::{debug, info, warn};

use crate::cache::CachePolicy;
use crate::config::{ConfigError, SweepConfig};
use crate::error::HarnessError;
use crate::timing::{time_variant, Bogus, TimingStats};
use crate::verify::{verify_suite, Violation, VerifyOutcome};

/// One printed `[<variant> <policy>] <value>` line.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRow {
    /// Array length.
    pub len: usize,
    /// Variant name.
    pub variant: String,
    /// Cache state the variant was timed under.
    pub policy: CachePolicy,
    /// Raw per-call statistics.
    pub stats: TimingStats,
    /// The value printed, per [`SweepConfig::statistic`].
    pub value: f64,
}

/// A checker failure tagged with the array length it happened at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeViolation {
    /// Array length.
    pub len: usize,
    /// Variant name.
    pub variant: String,
    /// First violation for that variant at that length.
    pub violation: Violation,
}

/// Everything [`Sweep::run`] measured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepSummary {
    /// Number of array sizes swept.
    pub sizes: usize,
    /// Timed rows, in print order.
    pub rows: Vec<SweepRow>,
    /// Checker failures (only when [`SweepConfig::verify`] is set).
    pub violations: Vec<SizeViolation>,
    /// Final value of the result sink.
    pub bogus: i64,
}

/// A validated sweep, ready to run.
#[derive(Debug)]
pub struct Sweep<K> {
    config: SweepConfig,
    suite: SearchSuite,
    clock: K,
}

impl<K: CycleClock> Sweep<K> {
    /// Validate `config` and bind it to a suite and a clock.
    ///
    /// # Errors
    ///
    /// Any [`SweepConfig::validate`] error, or [`ConfigError::EmptySuite`].
    pub fn new(config: SweepConfig, suite: SearchSuite, clock: K) -> Result<Self, ConfigError> {
        config.validate()?;
        if suite.is_empty() {
            return Err(ConfigError::EmptySuite);
        }
        Ok(Self {
            config,
            suite,
            clock,
        })
    }

    /// The configuration this sweep runs with.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// The variants timed, in report order.
    pub fn suite(&self) -> &SearchSuite {
        &self.suite
    }

    /// Time every variant under every cache policy at every size and
    /// write the report to `out`.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Data`] if an array cannot be allocated,
    /// [`HarnessError::Io`] if `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SweepSummary, HarnessError> {
        let cfg = &self.config;
        info!(
            min_len = cfg.min_len,
            max_len = cfg.max_len,
            queries = cfg.query_count,
            variants = self.suite.len(),
            unit = self.clock.unit(),
            statistic = %cfg.statistic,
            "starting sweep"
        );

        writeln!(
            out,
            "# Objective: fast search in 16-bit arrays of up to {} integers.",
            cfg.max_len
        )?;
        writeln!(out, "# output is formatted for processing with gnuplot.")?;

        let mut rng = Pcg32::new(cfg.seed);
        let queries = random_array(&mut rng, cfg.query_count)?;
        let mut bogus = Bogus::default();
        let mut summary = SweepSummary::default();

        for len in cfg.sizes() {
            let haystack = sorted_array(&mut rng, len)?;
            writeln!(out, "{len}")?;
            if cfg.verify {
                let found = self.check_size(len, &haystack, &queries, out)?;
                summary.violations.extend(found);
            }
            // Nothing buffered may be written out while the counter runs.
            out.flush()?;

            for (name, variant) in self.suite.iter() {
                for &policy in &cfg.cache_policies {
                    let stats = time_variant(
                        &haystack,
                        &queries,
                        variant,
                        &policy,
                        &self.clock,
                        cfg.cache_passes,
                        &mut bogus,
                    );
                    let value = stats.get(cfg.statistic).unwrap_or_default();
                    debug!(len, variant = name, policy = %policy, value, "timed");
                    writeln!(out, "[{name} {policy}] {value:.6}")?;
                    summary.rows.push(SweepRow {
                        len,
                        variant: name.to_string(),
                        policy,
                        stats,
                        value,
                    });
                }
            }
            writeln!(out)?;
            summary.sizes += 1;
        }

        summary.bogus = bogus.value();
        writeln!(out, "bogus = {}", summary.bogus)?;
        out.flush()?;
        info!(
            sizes = summary.sizes,
            rows = summary.rows.len(),
            violations = summary.violations.len(),
            "sweep finished"
        );
        Ok(summary)
    }

    /// Run only the checker, over the same keys and arrays [`run`](Self::run)
    /// would time, and write one diagnostic per failing variant and size.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Data`] if an array cannot be allocated,
    /// [`HarnessError::Io`] if `out` fails.
    pub fn verify<W: Write>(&self, out: &mut W) -> Result<Vec<SizeViolation>, HarnessError> {
        let cfg = &self.config;
        info!(
            min_len = cfg.min_len,
            max_len = cfg.max_len,
            queries = cfg.query_count,
            "starting verification"
        );
        let mut rng = Pcg32::new(cfg.seed);
        let queries = random_array(&mut rng, cfg.query_count)?;
        let mut violations = Vec::new();
        for len in cfg.sizes() {
            let haystack = sorted_array(&mut rng, len)?;
            violations.extend(self.check_size(len, &haystack, &queries, out)?);
        }
        out.flush()?;
        info!(violations = violations.len(), "verification finished");
        Ok(violations)
    }

    fn check_size<W: Write>(
        &self,
        len: usize,
        haystack: &[Key],
        queries: &[Key],
        out: &mut W,
    ) -> Result<Vec<SizeViolation>, HarnessError> {
        let mut found = Vec::new();
        for (name, outcome) in verify_suite(haystack, queries, &self.suite) {
            match outcome {
                VerifyOutcome::Failed(violation) => {
                    warn!(len, variant = name, code = violation.code(), %violation, "contract violated");
                    writeln!(out, "[{name} error: {}]", violation.code())?;
                    writeln!(out, "  length {len}: {violation}")?;
                    found.push(SizeViolation {
                        len,
                        variant: name.to_string(),
                        violation,
                    });
                }
                VerifyOutcome::Passed => debug!(len, variant = name, "contract holds"),
                VerifyOutcome::Skipped => {}
            }
        }
        Ok(found)
    }
}
