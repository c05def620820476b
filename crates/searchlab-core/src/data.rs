//! Synthetic haystack and query generators.
//!
//! Both generators draw one [`Pcg32`] value per element and keep the low
//! 16 bits. Buffers are reserved up front with `try_reserve_exact` so an
//! allocation failure is reported instead of aborting the process.

use crate::error::DataError;
use crate::rng::Pcg32;
use crate::Key;

fn draw(rng: &mut Pcg32, len: usize) -> Result<Vec<Key>, DataError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| DataError::AllocationFailed { requested: len })?;
    out.extend((0..len).map(|_| rng.next_u16()));
    Ok(out)
}

/// Generate `length` random keys sorted in ascending order.
///
/// Duplicates are kept. A zero length yields an empty vector.
pub fn sorted_array(rng: &mut Pcg32, length: usize) -> Result<Vec<Key>, DataError> {
    let mut out = draw(rng, length)?;
    out.sort_unstable();
    Ok(out)
}

/// Generate `count` random keys in draw order.
pub fn random_array(rng: &mut Pcg32, count: usize) -> Result<Vec<Key>, DataError> {
    draw(rng, count)
}
