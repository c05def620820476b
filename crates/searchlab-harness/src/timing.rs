//! Per-call timing of a search over a batch of queries.
//!
//! One trial per query: put the haystack into the requested cache state,
//! fence, read the counter, call the search once, read the counter again.
//! Both the minimum and the sum of the elapsed readings are kept; the
//! report chooses one via [`Statistic`].

use std::fmt;
use std::hint::black_box;
use std::sync::atomic::{compiler_fence, Ordering};

use searchlab_core::{CacheControl, CycleClock, Key};
use searchlab_search::SearchVariant;

/// Which summary of a batch is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Sum of elapsed readings divided by the number of trials.
    #[default]
    Mean,
    /// Smallest single elapsed reading.
    Min,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => f.write_str("mean"),
            Self::Min => f.write_str("min"),
        }
    }
}

/// Running minimum and sum of elapsed counter readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingStats {
    trials: u64,
    min: u64,
    total: u64,
}

impl TimingStats {
    /// No trials recorded.
    pub fn new() -> Self {
        Self {
            trials: 0,
            min: u64::MAX,
            total: 0,
        }
    }

    /// Add one trial.
    #[inline]
    pub fn record(&mut self, elapsed: u64) {
        self.trials += 1;
        self.min = self.min.min(elapsed);
        self.total = self.total.saturating_add(elapsed);
    }

    /// Number of trials recorded.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Sum of all elapsed readings.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Smallest elapsed reading, if any trial ran.
    pub fn min(&self) -> Option<u64> {
        (self.trials > 0).then_some(self.min)
    }

    /// Mean elapsed reading, if any trial ran.
    pub fn mean(&self) -> Option<f64> {
        (self.trials > 0).then(|| self.total as f64 / self.trials as f64)
    }

    /// The requested summary.
    pub fn get(&self, statistic: Statistic) -> Option<f64> {
        match statistic {
            Statistic::Mean => self.mean(),
            Statistic::Min => self.min().map(|m| m as f64),
        }
    }
}

impl Default for TimingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink for search results, so the optimizer cannot drop the calls.
///
/// The value itself means nothing; it is printed at the end of a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bogus(i64);

impl Bogus {
    /// Fold one raw result in.
    #[inline]
    pub fn absorb(&mut self, raw: isize) {
        self.0 = self.0.wrapping_add(raw as i64);
    }

    /// Accumulated value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Time `search` once per query in `queries`.
///
/// Before every trial `cache` is applied `cache_passes` times. Every
/// result is absorbed into `bogus`.
pub fn time_search<F, R, C, K>(
    haystack: &[Key],
    queries: &[Key],
    mut search: F,
    cache: &C,
    clock: &K,
    cache_passes: u32,
    bogus: &mut Bogus,
) -> TimingStats
where
    F: FnMut(&[Key], Key) -> R,
    R: Into<isize>,
    C: CacheControl + ?Sized,
    K: CycleClock + ?Sized,
{
    let mut stats = TimingStats::new();
    for &key in queries {
        for _ in 0..cache_passes {
            cache.apply(haystack);
        }
        compiler_fence(Ordering::SeqCst);
        let start = clock.start();
        let result = black_box(search(black_box(haystack), black_box(key)));
        let stop = clock.stop();
        bogus.absorb(result.into());
        stats.record(stop.saturating_sub(start));
    }
    stats
}

/// [`time_search`] for a registered variant.
///
/// The variant is matched once, outside the timed loop.
pub fn time_variant<C, K>(
    haystack: &[Key],
    queries: &[Key],
    variant: &SearchVariant,
    cache: &C,
    clock: &K,
    cache_passes: u32,
    bogus: &mut Bogus,
) -> TimingStats
where
    C: CacheControl + ?Sized,
    K: CycleClock + ?Sized,
{
    match *variant {
        SearchVariant::Ordered(f) => {
            time_search(haystack, queries, f, cache, clock, cache_passes, bogus)
        }
        SearchVariant::EqualityOnly(f) => {
            time_search(haystack, queries, f, cache, clock, cache_passes, bogus)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlab_search::{equality_linear_search, linear_search};
    use searchlab_test_utils::{CountingCache, ScriptedClock, SCENARIO};

    #[test]
    fn empty_stats() {
        let s = TimingStats::new();
        assert_eq!(s.trials(), 0);
        assert_eq!(s.min(), None);
        assert_eq!(s.mean(), None);
        assert_eq!(s.get(Statistic::Min), None);
    }

    #[test]
    fn min_and_mean_are_exact() {
        let clock = ScriptedClock::new([40, 10, 25, 5]);
        let cache = CountingCache::new("mock");
        let mut bogus = Bogus::default();
        let stats = time_search(
            &SCENARIO,
            &[1, 2, 3, 4],
            linear_search,
            &cache,
            &clock,
            2,
            &mut bogus,
        );
        assert_eq!(stats.trials(), 4);
        assert_eq!(stats.min(), Some(5));
        assert_eq!(stats.total(), 80);
        assert_eq!(stats.mean(), Some(20.0));
        assert_eq!(stats.get(Statistic::Min), Some(5.0));
        assert_eq!(stats.get(Statistic::Mean), Some(20.0));
    }

    #[test]
    fn cache_applied_per_pass_per_query() {
        let clock = ScriptedClock::constant(1);
        let cache = CountingCache::new("mock");
        let mut bogus = Bogus::default();
        time_search(&SCENARIO, &[7; 10], linear_search, &cache, &clock, 2, &mut bogus);
        assert_eq!(cache.calls(), 20);
        assert!(cache.lengths().iter().all(|&l| l == SCENARIO.len()));
        assert_eq!(clock.reads(), 20);
    }

    #[test]
    fn bogus_absorbs_every_result() {
        let clock = ScriptedClock::constant(1);
        let cache = CountingCache::new("mock");
        let queries = [3u16, 5, 20, 9];
        let expected: i64 = queries
            .iter()
            .map(|&k| linear_search(&SCENARIO, k).raw() as i64)
            .sum();
        let mut bogus = Bogus::default();
        time_search(&SCENARIO, &queries, linear_search, &cache, &clock, 1, &mut bogus);
        assert_eq!(bogus.value(), expected);
    }

    #[test]
    fn closures_are_accepted() {
        let clock = ScriptedClock::constant(3);
        let cache = CountingCache::new("mock");
        let mut calls = 0;
        let mut bogus = Bogus::default();
        let stats = time_search(
            &SCENARIO,
            &[1, 2],
            |h: &[Key], k: Key| {
                calls += 1;
                linear_search(h, k)
            },
            &cache,
            &clock,
            0,
            &mut bogus,
        );
        assert_eq!(calls, 2);
        assert_eq!(cache.calls(), 0);
        assert_eq!(stats.mean(), Some(3.0));
    }

    #[test]
    fn time_variant_dispatches_equality_only() {
        let clock = ScriptedClock::constant(2);
        let cache = CountingCache::new("mock");
        let mut bogus = Bogus::default();
        let variant = SearchVariant::EqualityOnly(equality_linear_search);
        time_variant(&SCENARIO, &[8, 9], &variant, &cache, &clock, 1, &mut bogus);
        // Miss (-1) plus hit at index 3.
        assert_eq!(bogus.value(), 2);
    }

    #[test]
    fn bogus_wraps_instead_of_overflowing() {
        let mut bogus = Bogus(i64::MAX);
        bogus.absorb(1);
        assert_eq!(bogus.value(), i64::MIN);
    }
}
