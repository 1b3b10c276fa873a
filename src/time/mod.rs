//! Physical and logical time.
//!
//! `logical` holds the packing of `(millis, counter)` into one ordinal. The
//! [`Clock`] trait is the only place the crate reads the wall clock, so tests
//! and simulations can substitute their own source.

pub mod logical;

pub use logical::{normalize_millis, pack, unpack};

/// Source of wall-clock readings in milliseconds since the Unix epoch.
pub trait Clock {
    /// Returns the current wall time.
    fn now_millis(&self) -> u64;
}

/// Reads the operating system clock through chrono.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // A host clock set before 1970 reads as the epoch.
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
