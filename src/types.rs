//! Shared protocol constants and the node identifier capability.
//!
//! The constants here fix the bit layout of the logical time and the bounds
//! enforced by `send`/`receive`. They are not configurable at runtime: two
//! nodes exchanging timestamps must agree on them.

use std::fmt::{Debug, Display};

/// Number of low bits of the logical time that hold the counter.
pub const SHIFT: u32 = 16;

/// Largest counter value representable in the logical time.
pub const MAX_COUNTER: u16 = 0xFFFF;

/// Maximum distance, in milliseconds, a timestamp may run ahead of the
/// observed wall clock (one minute).
pub const MAX_DRIFT_MS: u64 = 60_000;

/// Inputs at or above this value are taken to be microseconds since the
/// epoch and are divided by 1000. It is also the exclusive upper bound for a
/// normalized millisecond value, since `millis << SHIFT` must fit a `u64`.
pub const MICROS_THRESHOLD: u64 = 1 << 48;

/// Identifier of a participating node.
///
/// Any totally ordered, cloneable type with a textual rendering qualifies:
/// `String`, integers, `uuid::Uuid`, newtypes over those. The ordering breaks
/// ties between timestamps with equal logical time; the `Display` output is
/// what both wire forms carry.
pub trait NodeId: Ord + Clone + Debug + Display {}

impl<T> NodeId for T where T: Ord + Clone + Debug + Display {}
