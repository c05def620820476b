//! Counter sources for the timing harness.
//!
//! [`Tsc`] reads the x86_64 timestamp counter with serializing sequences
//! on both sides of the timed call. [`WallClock`] is the portable
//! fallback: nanoseconds from `Instant`, which on most platforms has a
//! resolution of tens of nanoseconds, far coarser than a single search
//! on a 64-element array. Numbers from the two are not comparable.

use std::sync::atomic::{compiler_fence, Ordering};
use std::time::Instant;

use searchlab_core::CycleClock;

/// Serializing timestamp-counter reads (x86_64 only).
#[cfg(target_arch = "x86_64")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Tsc;

#[cfg(target_arch = "x86_64")]
impl CycleClock for Tsc {
    #[inline(always)]
    fn start(&self) -> u64 {
        crate::arch::counter_start()
    }

    #[inline(always)]
    fn stop(&self) -> u64 {
        crate::arch::counter_stop()
    }

    fn unit(&self) -> &'static str {
        "cycles"
    }
}

/// Monotonic wall clock in nanoseconds since construction.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    /// Start a clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline(always)]
    fn read(&self) -> u64 {
        compiler_fence(Ordering::SeqCst);
        let ns = self.origin.elapsed().as_nanos();
        compiler_fence(Ordering::SeqCst);
        u64::try_from(ns).unwrap_or(u64::MAX)
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleClock for WallClock {
    #[inline(always)]
    fn start(&self) -> u64 {
        self.read()
    }

    #[inline(always)]
    fn stop(&self) -> u64 {
        self.read()
    }

    fn unit(&self) -> &'static str {
        "ns"
    }
}

/// Best counter available on the build target.
#[derive(Clone, Copy, Debug)]
pub enum SystemClock {
    /// Timestamp counter.
    #[cfg(target_arch = "x86_64")]
    Tsc(Tsc),
    /// `Instant`-based fallback.
    Wall(WallClock),
}

impl SystemClock {
    /// [`Tsc`] on x86_64, [`WallClock`] elsewhere.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self::Tsc(Tsc)
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            Self::Wall(WallClock::new())
        }
    }
}

/// Shorthand for [`SystemClock::detect`].
pub fn default_clock() -> SystemClock {
    SystemClock::detect()
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::detect()
    }
}

impl CycleClock for SystemClock {
    #[inline(always)]
    fn start(&self) -> u64 {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::Tsc(c) => c.start(),
            Self::Wall(c) => c.start(),
        }
    }

    #[inline(always)]
    fn stop(&self) -> u64 {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::Tsc(c) => c.stop(),
            Self::Wall(c) => c.stop(),
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::Tsc(c) => c.unit(),
            Self::Wall(c) => c.unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_is_monotonic() {
        let clock = WallClock::new();
        let mut prev = clock.start();
        for _ in 0..1000 {
            let now = clock.stop();
            assert!(now >= prev);
            prev = now;
        }
        assert_eq!(clock.unit(), "ns");
    }

    #[test]
    fn detected_clock_unit() {
        let clock = SystemClock::detect();
        if cfg!(target_arch = "x86_64") {
            assert_eq!(clock.unit(), "cycles");
        } else {
            assert_eq!(clock.unit(), "ns");
        }
    }

    #[test]
    fn detected_clock_elapsed_is_sane() {
        let clock = default_clock();
        let s = clock.start();
        let e = clock.stop();
        assert!(e >= s);
    }
}
