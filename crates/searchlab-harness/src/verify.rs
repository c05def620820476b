//! Contract checker for insertion-point searches.
//!
//! For each query the result must either point at an equal element, or
//! decode to an insertion point `ip` with `haystack[ip - 1] < key <
//! haystack[ip]` wherever those neighbours exist. The first broken query
//! stops the batch and is reported as a [`Violation`].

use std::fmt;

use searchlab_core::{Key, Lookup, SearchResult};
use searchlab_search::{SearchSuite, SearchVariant};

/// First contract breach found in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A non-negative result that does not point at the key
    /// (`found` is `None` when the index is out of range).
    WrongMatch {
        /// Returned index.
        index: usize,
        /// Element at that index.
        found: Option<Key>,
        /// Key searched for.
        target: Key,
    },
    /// The element at the insertion point is not strictly greater.
    NotAboveTarget {
        /// Decoded insertion point.
        ip: usize,
        /// Element at `ip`.
        value: Key,
        /// Key searched for.
        target: Key,
    },
    /// The element before the insertion point is not strictly less
    /// (`previous` is `None` when `ip` is past the end).
    NotBelowTarget {
        /// Decoded insertion point.
        ip: usize,
        /// Element at `ip - 1`.
        previous: Option<Key>,
        /// Key searched for.
        target: Key,
    },
}

impl Violation {
    /// Numeric code printed in `[<variant> error: <code>]` lines.
    pub fn code(&self) -> u8 {
        match self {
            Self::WrongMatch { .. } => 1,
            Self::NotAboveTarget { .. } => 3,
            Self::NotBelowTarget { .. } => 4,
        }
    }

    /// Key whose lookup broke the contract.
    pub fn target(&self) -> Key {
        match *self {
            Self::WrongMatch { target, .. }
            | Self::NotAboveTarget { target, .. }
            | Self::NotBelowTarget { target, .. } => target,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WrongMatch {
                index,
                found: Some(v),
                target,
            } => write!(f, "Index returned is {index} which points at {v} for target {target}."),
            Self::WrongMatch {
                index,
                found: None,
                target,
            } => write!(f, "Index returned is {index} which is out of range for target {target}."),
            Self::NotAboveTarget { ip, value, target } => write!(
                f,
                "Insertion point is {ip} which points at {value} for target {target}."
            ),
            Self::NotBelowTarget {
                ip,
                previous: Some(v),
                target,
            } => write!(
                f,
                "Insertion point is {ip}; previous index {} points at {v} for target {target}.",
                ip - 1
            ),
            Self::NotBelowTarget {
                ip,
                previous: None,
                target,
            } => write!(f, "Insertion point is {ip} which is past the end for target {target}."),
        }
    }
}

/// Check one result against the contract.
pub fn check_result(haystack: &[Key], key: Key, result: SearchResult) -> Result<(), Violation> {
    match result.decode() {
        Lookup::Found(index) => match haystack.get(index) {
            Some(&v) if v == key => Ok(()),
            found => Err(Violation::WrongMatch {
                index,
                found: found.copied(),
                target: key,
            }),
        },
        Lookup::Insert(ip) => {
            if ip > haystack.len() {
                return Err(Violation::NotBelowTarget {
                    ip,
                    previous: None,
                    target: key,
                });
            }
            if let Some(&value) = haystack.get(ip) {
                if value <= key {
                    return Err(Violation::NotAboveTarget {
                        ip,
                        value,
                        target: key,
                    });
                }
            }
            if ip > 0 {
                let prev = haystack[ip - 1];
                if prev >= key {
                    return Err(Violation::NotBelowTarget {
                        ip,
                        previous: Some(prev),
                        target: key,
                    });
                }
            }
            Ok(())
        }
    }
}

/// Run `search` for every query and return the first violation.
pub fn verify_search<F>(haystack: &[Key], queries: &[Key], search: F) -> Result<(), Violation>
where
    F: Fn(&[Key], Key) -> SearchResult,
{
    queries
        .iter()
        .try_for_each(|&key| check_result(haystack, key, search(haystack, key)))
}

/// Result of checking one variant of a suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Every query satisfied the contract.
    Passed,
    /// The first violation found.
    Failed(Violation),
    /// Equality-only variant; it does not promise insertion points.
    Skipped,
}

/// Check every variant of `suite`, in suite order.
pub fn verify_suite<'s>(
    haystack: &[Key],
    queries: &[Key],
    suite: &'s SearchSuite,
) -> Vec<(&'s str, VerifyOutcome)> {
    suite
        .iter()
        .map(|(name, variant)| {
            let outcome = match variant {
                SearchVariant::Ordered(f) => match verify_search(haystack, queries, *f) {
                    Ok(()) => VerifyOutcome::Passed,
                    Err(v) => VerifyOutcome::Failed(v),
                },
                SearchVariant::EqualityOnly(_) => VerifyOutcome::Skipped,
            };
            (name, outcome)
        })
        .collect()
}
