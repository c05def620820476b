//! Top-level error for running a sweep.

use std::error::Error;
use std::fmt;
use std::io;

use searchlab_core::DataError;

use crate::config::ConfigError;

/// Anything that stops a [`Sweep`](crate::Sweep) before it finishes.
#[derive(Debug)]
pub enum HarnessError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// A generated array could not be allocated.
    Data(DataError),
    /// The report could not be written.
    Io(io::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Data(e) => write!(f, "data: {e}"),
            Self::Io(e) => write!(f, "output: {e}"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Data(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for HarnessError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DataError> for HarnessError {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}

impl From<io::Error> for HarnessError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
