//! Encoded return values of search functions.
//!
//! [`SearchResult`] packs either a match index or an insertion point into
//! one signed integer: `i >= 0` is a match at `i`, `-(ip + 1)` is a miss
//! whose key belongs at `ip`. [`MatchResult`] is the weaker encoding of
//! equality-only searches and deliberately has no insertion point.

use std::fmt;

/// Decoded form of a [`SearchResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// The key is present at this index.
    Found(usize),
    /// The key is absent; inserting it here keeps the haystack sorted.
    Insert(usize),
}

/// Match index or encoded insertion point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SearchResult(isize);

impl SearchResult {
    /// A match at `index`.
    #[inline]
    pub fn found(index: usize) -> Self {
        Self(index as isize)
    }

    /// A miss whose key belongs at `ip`.
    #[inline]
    pub fn insert_at(ip: usize) -> Self {
        Self(-(ip as isize) - 1)
    }

    /// Wrap a raw encoded value.
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw encoded value.
    #[inline]
    pub fn raw(self) -> isize {
        self.0
    }

    /// Decode into [`Lookup`].
    pub fn decode(self) -> Lookup {
        if self.0 >= 0 {
            Lookup::Found(self.0 as usize)
        } else {
            Lookup::Insert((-(self.0 + 1)) as usize)
        }
    }

    /// Match index, if the key was found.
    pub fn index(self) -> Option<usize> {
        match self.decode() {
            Lookup::Found(i) => Some(i),
            Lookup::Insert(_) => None,
        }
    }

    /// Insertion point, if the key was not found.
    pub fn insertion_point(self) -> Option<usize> {
        match self.decode() {
            Lookup::Found(_) => None,
            Lookup::Insert(ip) => Some(ip),
        }
    }

    /// Same shape as `slice::binary_search`: `Ok(index)` or `Err(ip)`.
    pub fn to_std(self) -> Result<usize, usize> {
        match self.decode() {
            Lookup::Found(i) => Ok(i),
            Lookup::Insert(ip) => Err(ip),
        }
    }
}

impl From<SearchResult> for isize {
    fn from(r: SearchResult) -> Self {
        r.0
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Lookup::Found(i) => write!(f, "found at {i}"),
            Lookup::Insert(ip) => write!(f, "insert at {ip}"),
        }
    }
}

/// Result of an equality-only search: match index or `-1`.
///
/// A miss says nothing about where the key would go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MatchResult(isize);

impl MatchResult {
    /// Raw value of every miss.
    pub const MISS: MatchResult = MatchResult(-1);

    /// A match at `index`.
    #[inline]
    pub fn found(index: usize) -> Self {
        Self(index as isize)
    }

    /// The raw encoded value.
    #[inline]
    pub fn raw(self) -> isize {
        self.0
    }

    /// Match index, if the key was found.
    pub fn index(self) -> Option<usize> {
        (self.0 >= 0).then_some(self.0 as usize)
    }
}

impl From<MatchResult> for isize {
    fn from(r: MatchResult) -> Self {
        r.0
    }
}
