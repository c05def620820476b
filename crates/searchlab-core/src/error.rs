//! Error types for seeding and data generation.

use std::error::Error;
use std::fmt;

/// Errors from constructing a [`PcgSeed`](crate::PcgSeed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// The stream increment must be odd for the generator to reach its
    /// full period.
    EvenIncrement {
        /// The rejected increment.
        increment: u64,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenIncrement { increment } => {
                write!(f, "pcg increment {increment:#018x} must be odd")
            }
        }
    }
}

impl Error for SeedError {}

/// Errors from the data generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataError {
    /// The allocator refused the buffer for a generated array.
    AllocationFailed {
        /// Number of elements that were requested.
        requested: usize,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "failed to allocate {requested} elements")
            }
        }
    }
}

impl Error for DataError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_error_shows_increment_in_hex() {
        let msg = SeedError::EvenIncrement { increment: 2 }.to_string();
        assert_eq!(msg, "pcg increment 0x0000000000000002 must be odd");
    }

    #[test]
    fn data_error_names_request_size() {
        let msg = DataError::AllocationFailed { requested: 64 }.to_string();
        assert!(msg.contains("64"), "{msg}");
    }
}
