//! Cache-state controllers.
//!
//! Each controller walks the haystack one cache line (32 keys) at a time.
//! They are hints or directives to the hardware and report nothing back;
//! whether the line really left or entered the cache is not observable
//! from here.

use std::fmt;

use searchlab_core::{CacheControl, Key};

use crate::arch;

/// Evict the haystack so the timed call starts from memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flush;

impl CacheControl for Flush {
    fn name(&self) -> &str {
        "flush"
    }

    fn apply(&self, haystack: &[Key]) {
        arch::flush_lines(haystack)
    }
}

/// Prefetch the haystack so the timed call starts from L1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Prefetch;

impl CacheControl for Prefetch {
    fn name(&self) -> &str {
        "prefetch"
    }

    fn apply(&self, haystack: &[Key]) {
        arch::prefetch_lines(haystack)
    }
}

/// Leave the cache alone; whatever the previous trial left behind stays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Untouched;

impl CacheControl for Untouched {
    fn name(&self) -> &str {
        "untouched"
    }

    fn apply(&self, _haystack: &[Key]) {}
}

/// Cache state selectable from [`SweepConfig`](crate::SweepConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// See [`Flush`].
    Flush,
    /// See [`Prefetch`].
    Prefetch,
    /// See [`Untouched`].
    Untouched,
}

impl CachePolicy {
    /// Every policy, in report order.
    pub const ALL: [CachePolicy; 3] = [Self::Flush, Self::Prefetch, Self::Untouched];
}

impl CacheControl for CachePolicy {
    fn name(&self) -> &str {
        match self {
            Self::Flush => "flush",
            Self::Prefetch => "prefetch",
            Self::Untouched => "untouched",
        }
    }

    #[inline]
    fn apply(&self, haystack: &[Key]) {
        match self {
            Self::Flush => Flush.apply(haystack),
            Self::Prefetch => Prefetch.apply(haystack),
            Self::Untouched => Untouched.apply(haystack),
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
