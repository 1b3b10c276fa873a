//! A mutex-guarded canonical timestamp.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::HlcError;
use crate::primitives::Hlc;
use crate::time::{Clock, SystemClock};
use crate::types::NodeId;

/// Owns a node's canonical timestamp and serializes `send`/`receive` on it.
///
/// Each call observes the value left by the previous one, so the canonical
/// logical time never decreases even when many threads share the clock.
/// Failed calls leave the canonical value untouched.
#[derive(Debug)]
pub struct CanonicalClock<N, C = SystemClock> {
    canonical: Mutex<Hlc<N>>,
    clock: C,
}

impl<N: NodeId> CanonicalClock<N, SystemClock> {
    /// Starts from `initial`, reading the system clock.
    pub fn new(initial: Hlc<N>) -> Self {
        Self::with_clock(initial, SystemClock)
    }
}

impl<N: NodeId, C: Clock> CanonicalClock<N, C> {
    /// Starts from `initial`, reading `clock`.
    pub fn with_clock(initial: Hlc<N>, clock: C) -> Self {
        CanonicalClock {
            canonical: Mutex::new(initial),
            clock,
        }
    }

    /// The current canonical timestamp.
    pub fn current(&self) -> Hlc<N> {
        self.lock().clone()
    }

    /// Issues a timestamp for a local event and makes it canonical.
    pub fn send(&self) -> Result<Hlc<N>, HlcError> {
        let mut canonical = self.lock();
        let next = canonical.send_with(&self.clock)?;
        *canonical = next.clone();
        Ok(next)
    }

    /// Folds a remote timestamp into the canonical one and returns the result.
    pub fn receive(&self, remote: &Hlc<N>) -> Result<Hlc<N>, HlcError> {
        let mut canonical = self.lock();
        let merged = canonical.receive_with(remote, &self.clock)?;
        *canonical = merged.clone();
        Ok(merged)
    }

    fn lock(&self) -> MutexGuard<'_, Hlc<N>> {
        // The value is only replaced after a successful call, so a poisoned
        // lock still holds a valid timestamp.
        self.canonical.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
