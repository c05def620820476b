//! Test utilities and mock types for searchlab development.
//!
//! Provides mock implementations of the harness capabilities
//! ([`CacheControl`], [`CycleClock`]) plus the fixtures in [`fixtures`]:
//! reference haystacks, deliberately broken searchers, a contract oracle,
//! and proptest strategies.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    arb_query, arb_sorted_haystack, check_contract, found_past_end, insert_one_early,
    insert_one_late, wrong_match, SCENARIO,
};

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use searchlab_core::{CacheControl, CycleClock, Key};

/// Mock [`CacheControl`] that counts calls and records haystack lengths.
#[derive(Debug)]
pub struct CountingCache {
    name: String,
    calls: Cell<usize>,
    lengths: RefCell<Vec<usize>>,
}

impl CountingCache {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Cell::new(0),
            lengths: RefCell::new(Vec::new()),
        }
    }

    /// Number of `apply` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Haystack length seen by each `apply` call, in order.
    pub fn lengths(&self) -> Vec<usize> {
        self.lengths.borrow().clone()
    }
}

impl CacheControl for CountingCache {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, haystack: &[Key]) {
        self.calls.set(self.calls.get() + 1);
        self.lengths.borrow_mut().push(haystack.len());
    }
}

/// Mock [`CycleClock`] that hands out a fixed elapsed time per trial.
///
/// Each `start` returns the running counter; the matching `stop` advances
/// it by the next scripted duration. When the script runs out, the last
/// duration repeats (or 0 if the script was empty).
#[derive(Debug)]
pub struct ScriptedClock {
    now: Cell<u64>,
    script: RefCell<VecDeque<u64>>,
    last: Cell<u64>,
    reads: Cell<usize>,
}

impl ScriptedClock {
    pub fn new(durations: impl IntoIterator<Item = u64>) -> Self {
        Self {
            now: Cell::new(1_000),
            script: RefCell::new(durations.into_iter().collect()),
            last: Cell::new(0),
            reads: Cell::new(0),
        }
    }

    /// Every trial takes `cycles`.
    pub fn constant(cycles: u64) -> Self {
        Self::new([cycles])
    }

    /// Total number of `start` + `stop` reads.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl CycleClock for ScriptedClock {
    fn start(&self) -> u64 {
        self.reads.set(self.reads.get() + 1);
        self.now.get()
    }

    fn stop(&self) -> u64 {
        self.reads.set(self.reads.get() + 1);
        let step = match self.script.borrow_mut().pop_front() {
            Some(d) => {
                self.last.set(d);
                d
            }
            None => self.last.get(),
        };
        self.now.set(self.now.get() + step);
        self.now.get()
    }

    fn unit(&self) -> &'static str {
        "ticks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_clock_replays_then_repeats() {
        let clock = ScriptedClock::new([5, 9]);
        let mut elapsed = Vec::new();
        for _ in 0..4 {
            let s = clock.start();
            let e = clock.stop();
            elapsed.push(e - s);
        }
        assert_eq!(elapsed, vec![5, 9, 9, 9]);
        assert_eq!(clock.reads(), 8);
    }

    #[test]
    fn counting_cache_records_lengths() {
        let cache = CountingCache::new("mock");
        cache.apply(&[1, 2, 3]);
        cache.apply(&[]);
        assert_eq!(cache.calls(), 2);
        assert_eq!(cache.lengths(), vec![3, 0]);
        assert_eq!(cache.name(), "mock");
    }
}
