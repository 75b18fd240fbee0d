//! Bounded-integer sampling
//!
//! Produces an integer in the inclusive range `[min, max]` from exactly four
//! bytes of entropy.
//!
//! # Algorithm
//!
//! 1. Reject `max <= min` (reported against `max`).
//! 2. Compute the range size in `i64` as `max - min + 1`. For
//!    `min = i32::MIN, max = i32::MAX` this is `2^32`, which does not fit in
//!    `i32` or `u32`.
//! 3. Read four bytes and decode them as a little-endian `u32`.
//! 4. Reduce the word modulo the range size (in `i64`).
//! 5. Return `min + offset`, which is always within `[min, max]`.
//!
//! # Known limitation: modulo bias
//!
//! This is direct modulo reduction, not rejection sampling. When the range
//! size does not divide `2^32`, the first `2^32 mod size` outcomes are each
//! produced by one extra word, so they are favoured by a relative factor of
//! at most `size / 2^32`. For ranges far smaller than `2^32` the skew is
//! negligible; for ranges near `2^31` it is not.

use crate::entropy::EntropySource;
use crate::error::{Result, SecureRandomError};

/// Number of entropy bytes consumed per bounded sample.
pub const WORD_BYTES: usize = 4;

/// Checks the `max > min` precondition.
pub(crate) fn validate_range(min: i32, max: i32) -> Result<()> {
    if max <= min {
        return Err(SecureRandomError::invalid_max());
    }

    Ok(())
}

/// Checks the `size >= 1` precondition.
pub(crate) fn validate_size(size: usize) -> Result<()> {
    if size < 1 {
        return Err(SecureRandomError::invalid_size());
    }

    Ok(())
}

/// Maps a uniformly random word onto `[min, max]`.
///
/// Callers must have validated `max > min`.
#[inline]
pub(crate) fn reduce(min: i32, max: i32, word: u32) -> i32 {
    let range_size = i64::from(max) - i64::from(min) + 1;
    let offset = i64::from(word) % range_size;

    // min + offset <= max by construction
    (i64::from(min) + offset) as i32
}

/// Draws one bounded value from `source`.
///
/// Validates the range, then consumes exactly [`WORD_BYTES`] bytes.
pub(crate) fn sample_range<S>(source: &mut S, min: i32, max: i32) -> Result<i32>
where
    S: EntropySource + ?Sized,
{
    validate_range(min, max)?;

    let mut word = [0u8; WORD_BYTES];
    source.fill(&mut word)?;

    Ok(reduce(min, max, u32::from_le_bytes(word)))
}

/// Draws `size` random bytes from `source`.
pub(crate) fn sample_bytes<S>(source: &mut S, size: usize) -> Result<Vec<u8>>
where
    S: EntropySource + ?Sized,
{
    validate_size(size)?;

    let mut data = vec![0u8; size];
    source.fill(&mut data)?;

    Ok(data)
}
