//! Per-target cache and timestamp primitives.
//!
//! The only module in the workspace allowed to use `unsafe`. On x86_64
//! it wraps `clflush`, `prefetcht0`, `cpuid`, `rdtsc` and `rdtscp`; other
//! targets get portable fallbacks (flush does nothing, prefetch touches
//! one element per line).

#![allow(unsafe_code)]

use searchlab_core::Key;

/// Assumed cache line size in bytes.
pub const CACHE_LINE_BYTES: usize = 64;

/// Number of keys covered by one cache line.
pub const KEYS_PER_LINE: usize = CACHE_LINE_BYTES / std::mem::size_of::<Key>();

#[cfg(target_arch = "x86_64")]
mod imp {
    use std::arch::x86_64::{__cpuid, __rdtscp, _mm_clflush, _mm_prefetch, _rdtsc, _MM_HINT_T0};

    use super::KEYS_PER_LINE;
    use searchlab_core::Key;

    #[allow(unused_unsafe)]
    pub(super) fn flush_lines(haystack: &[Key]) {
        for k in haystack.iter().step_by(KEYS_PER_LINE) {
            // SAFETY: `k` points into a live slice. clflush only evicts the
            // line; SSE2 is part of the x86_64 baseline.
            unsafe {
                _mm_clflush((k as *const Key).cast::<u8>())
            }
        }
    }

    #[allow(unused_unsafe)]
    pub(super) fn prefetch_lines(haystack: &[Key]) {
        for k in haystack.iter().step_by(KEYS_PER_LINE) {
            // SAFETY: prefetch is a hint and never faults; the pointer is
            // valid regardless.
            unsafe {
                _mm_prefetch::<_MM_HINT_T0>((k as *const Key).cast::<i8>())
            }
        }
    }

    /// `cpuid` then `rdtsc`: earlier instructions retire before the read.
    #[inline(always)]
    #[allow(unused_unsafe)]
    pub(super) fn counter_start() -> u64 {
        // SAFETY: cpuid leaf 0 and rdtsc are available on every x86_64 CPU
        // and have no memory effects.
        unsafe {
            let _ = __cpuid(0);
            _rdtsc()
        }
    }

    /// `rdtscp` then `cpuid`: the timed code has finished before the read,
    /// and later instructions cannot start before it.
    #[inline(always)]
    #[allow(unused_unsafe)]
    pub(super) fn counter_stop() -> u64 {
        let mut aux = 0u32;
        // SAFETY: `aux` is a valid out-pointer; rdtscp is present on all
        // x86_64 parts this harness targets.
        unsafe {
            let t = __rdtscp(&mut aux);
            let _ = __cpuid(0);
            t
        }
    }
}

#[cfg(not(target_arch = "x86_64"))]
mod imp {
    use std::hint::black_box;

    use super::KEYS_PER_LINE;
    use searchlab_core::Key;

    pub(super) fn flush_lines(_haystack: &[Key]) {}

    pub(super) fn prefetch_lines(haystack: &[Key]) {
        for k in haystack.iter().step_by(KEYS_PER_LINE) {
            black_box(*k);
        }
    }
}

/// Evict every cache line of `haystack` (no-op without `clflush`).
#[inline]
pub fn flush_lines(haystack: &[Key]) {
    imp::flush_lines(haystack)
}

/// Pull every cache line of `haystack` towards L1.
#[inline]
pub fn prefetch_lines(haystack: &[Key]) {
    imp::prefetch_lines(haystack)
}

/// Whether a serializing cycle counter is available on this target.
pub const HAS_CYCLE_COUNTER: bool = cfg!(target_arch = "x86_64");

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn counter_start() -> u64 {
    imp::counter_start()
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn counter_stop() -> u64 {
    imp::counter_stop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_one_line_of_u16() {
        assert_eq!(KEYS_PER_LINE, 32);
    }

    #[test]
    fn primitives_accept_empty_and_odd_lengths() {
        for len in [0usize, 1, 31, 32, 33, 100] {
            let hay: Vec<Key> = (0..len as u16).collect();
            flush_lines(&hay);
            prefetch_lines(&hay);
            assert_eq!(hay, (0..len as u16).collect::<Vec<_>>());
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn counter_moves_forward() {
        let a = counter_start();
        let b = counter_stop();
        assert!(b >= a, "tsc went backwards: {a} -> {b}");
    }
}
