//! Packing of a `(millis, counter)` pair into a single logical-time ordinal.
//!
//! The upper 48 bits carry milliseconds since the epoch, the lower 16 bits the
//! counter, so comparing two logical times compares millis first and counter
//! second.

use crate::error::HlcError;
use crate::types::{MICROS_THRESHOLD, SHIFT};

/// Combines a normalized millisecond value and a counter.
///
/// `millis` must be below [`MICROS_THRESHOLD`]; values produced by
/// [`normalize_millis`] always are.
#[inline]
pub const fn pack(millis: u64, counter: u16) -> u64 {
    (millis << SHIFT) | counter as u64
}

/// Splits a logical time back into `(millis, counter)`.
#[inline]
pub const fn unpack(logical_time: u64) -> (u64, u16) {
    (logical_time >> SHIFT, (logical_time & 0xFFFF) as u16)
}

/// Brings an epoch reading to millisecond scale.
///
/// Values at or above 2^48 are assumed to be microseconds and divided by
/// 1000. A value that is still too large after that cannot be packed and is
/// rejected.
pub fn normalize_millis(millis: u64) -> Result<u64, HlcError> {
    if millis < MICROS_THRESHOLD {
        return Ok(millis);
    }
    let normalized = millis / 1000;
    if normalized >= MICROS_THRESHOLD {
        return Err(HlcError::MillisOutOfRange { millis });
    }
    tracing::debug!(
        "Normalized microsecond-scale input {} to {} ms",
        millis,
        normalized
    );
    Ok(normalized)
}
