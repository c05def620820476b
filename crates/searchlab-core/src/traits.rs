//! Capability traits the timing harness is generic over.
//!
//! Concrete implementations live in `searchlab-harness`; mocks for tests
//! live in `searchlab-test-utils`.

use crate::Key;

/// Puts a haystack into a known cache state before a timed call.
///
/// Implementations must not change the contents of `haystack`. They are
/// best-effort: on targets without the needed instructions an
/// implementation may do nothing.
pub trait CacheControl {
    /// Short name printed in report rows, e.g. `flush`.
    fn name(&self) -> &str;

    /// Apply the cache state to every cache line of `haystack`.
    fn apply(&self, haystack: &[Key]);
}

/// Monotonic counter read around a timed call.
///
/// `start` and `stop` may use different instruction sequences so that
/// the measured region is fenced on both sides. Readings are only
/// meaningful as differences between a `start` and the following `stop`.
pub trait CycleClock {
    /// Read the counter before the timed region.
    fn start(&self) -> u64;

    /// Read the counter after the timed region.
    fn stop(&self) -> u64;

    /// Unit of the readings, e.g. `cycles` or `ns`.
    fn unit(&self) -> &'static str;
}

impl<T: CacheControl + ?Sized> CacheControl for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, haystack: &[Key]) {
        (**self).apply(haystack)
    }
}

impl<T: CycleClock + ?Sized> CycleClock for &T {
    fn start(&self) -> u64 {
        (**self).start()
    }

    fn stop(&self) -> u64 {
        (**self).stop()
    }

    fn unit(&self) -> &'static str {
        (**self).unit()
    }
}
