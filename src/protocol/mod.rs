//!
//! The HLC synchronization protocol.
//!
//! A node keeps one canonical timestamp. Before emitting an event it calls
//! [`Hlc::send`] and adopts the result; on receiving a remote timestamp it
//! calls [`Hlc::receive`] and adopts that result. Both are pure: storing the
//! canonical value, and serializing concurrent calls against it, is up to the
//! caller. [`CanonicalClock`] is a ready-made mutex-guarded holder.

use crate::error::HlcError;
use crate::primitives::Hlc;
use crate::time::{self, Clock, SystemClock};
use crate::types::{NodeId, MAX_COUNTER, MAX_DRIFT_MS};

pub mod canonical;

pub use canonical::CanonicalClock;

/// Signed distance of `millis` ahead of `wall_millis`. Both are normalized,
/// so they fit in 48 bits.
#[inline]
fn drift(millis: u64, wall_millis: u64) -> i64 {
    millis as i64 - wall_millis as i64
}

impl<N: NodeId> Hlc<N> {
    /// Mints the next local timestamp against the system clock.
    pub fn send(&self) -> Result<Self, HlcError> {
        self.send_with(&SystemClock)
    }

    /// Mints the next local timestamp against `clock`.
    pub fn send_with<C: Clock>(&self, clock: &C) -> Result<Self, HlcError> {
        self.send_at(clock.now_millis())
    }

    /// Mints the next local timestamp given the current wall time.
    ///
    /// The result is strictly greater than `self` and not behind
    /// `wall_millis`. Fails with [`HlcError::ClockDrift`] when the result
    /// would be more than a minute ahead of the wall clock, and with
    /// [`HlcError::CounterOverflow`] when the counter is exhausted for the
    /// current millisecond.
    pub fn send_at(&self, wall_millis: u64) -> Result<Self, HlcError> {
        let wall_millis = time::normalize_millis(wall_millis)?;

        let millis = self.millis().max(wall_millis);
        let counter = if millis == self.millis() {
            u32::from(self.counter()) + 1
        } else {
            0
        };

        if millis - wall_millis > MAX_DRIFT_MS {
            let drift = drift(millis, wall_millis);
            tracing::warn!(
                "Refusing to send: clock of {:?} is {} ms ahead of wall time",
                self.node_id(),
                drift
            );
            return Err(HlcError::ClockDrift { drift });
        }
        if counter > u32::from(MAX_COUNTER) {
            tracing::warn!(
                "Refusing to send: counter overflow at {} ms on {:?}",
                millis,
                self.node_id()
            );
            return Err(HlcError::CounterOverflow { counter });
        }

        Ok(Hlc::from_logical_time(
            time::pack(millis, counter as u16),
            self.node_id().clone(),
        ))
    }

    /// Merges a remote timestamp using the system clock.
    pub fn receive(&self, remote: &Self) -> Result<Self, HlcError> {
        self.receive_with(remote, &SystemClock)
    }

    /// Merges a remote timestamp using `clock`.
    pub fn receive_with<C: Clock>(&self, remote: &Self, clock: &C) -> Result<Self, HlcError> {
        self.receive_at(remote, clock.now_millis())
    }

    /// Merges a remote timestamp given the current wall time.
    ///
    /// A remote that is not newer than `self` leaves it unchanged. A newer
    /// remote is adopted with the local node id, unless it carries the local
    /// node id ([`HlcError::DuplicateNode`]) or runs more than a minute ahead
    /// of the wall clock ([`HlcError::ClockDrift`]).
    pub fn receive_at(&self, remote: &Self, wall_millis: u64) -> Result<Self, HlcError> {
        if self.logical_time() >= remote.logical_time() {
            return Ok(self.clone());
        }

        if self.node_id() == remote.node_id() {
            tracing::warn!(
                "Remote timestamp {:?} carries the local node id {:?}",
                remote.logical_time(),
                self.node_id()
            );
            return Err(HlcError::DuplicateNode {
                node_id: self.node_id().to_string(),
            });
        }

        let wall_millis = time::normalize_millis(wall_millis)?;
        if remote.millis() > wall_millis && remote.millis() - wall_millis > MAX_DRIFT_MS {
            let drift = drift(remote.millis(), wall_millis);
            tracing::warn!(
                "Rejecting remote timestamp from {:?}: {} ms ahead of wall time",
                remote.node_id(),
                drift
            );
            return Err(HlcError::ClockDrift { drift });
        }

        tracing::trace!(
            "Adopting remote logical time {} from {:?}",
            remote.logical_time(),
            remote.node_id()
        );
        Ok(Hlc::from_logical_time(remote.logical_time(), self.node_id().clone()))
    }
}
