//! The hybrid logical clock timestamp.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::error::HlcError;
use crate::time::{self, Clock, SystemClock};
use crate::types::NodeId;

/// Hybrid logical clock timestamp: physical milliseconds, a logical counter
/// and the identifier of the node that issued it.
///
/// Values are immutable. `send`, `receive` and [`Hlc::copy_with`] all return
/// a new timestamp. Construction validates the counter range and normalizes
/// microsecond-scale inputs, so every `Hlc` has `millis < 2^48` and a
/// representable [`logical_time`](Hlc::logical_time).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hlc<N> {
    millis: u64,
    counter: u16,
    node_id: N,
}

impl<N: NodeId> Hlc<N> {
    /// Builds a timestamp from raw fields.
    ///
    /// Fails with [`HlcError::InvalidCounter`] when `counter > 65535`.
    /// `millis` values that look like microseconds (`>= 2^48`) are divided by
    /// 1000 first.
    pub fn new(millis: u64, counter: u32, node_id: N) -> Result<Self, HlcError> {
        let counter = u16::try_from(counter).map_err(|_| HlcError::InvalidCounter { counter })?;
        let millis = time::normalize_millis(millis)?;
        Ok(Hlc { millis, counter, node_id })
    }

    /// The timestamp at the epoch with a zero counter.
    pub fn zero(node_id: N) -> Self {
        Hlc { millis: 0, counter: 0, node_id }
    }

    /// Current system time with a zero counter.
    pub fn now(node_id: N) -> Result<Self, HlcError> {
        Self::now_with(&SystemClock, node_id)
    }

    /// Current time of `clock` with a zero counter.
    pub fn now_with<C: Clock>(clock: &C, node_id: N) -> Result<Self, HlcError> {
        Self::new(clock.now_millis(), 0, node_id)
    }

    /// The instant `date` with a zero counter.
    pub fn from_date(date: DateTime<Utc>, node_id: N) -> Result<Self, HlcError> {
        let millis = date.timestamp_millis();
        let millis = u64::try_from(millis).map_err(|_| HlcError::PreEpoch { millis })?;
        Self::new(millis, 0, node_id)
    }

    /// Inverse of [`logical_time`](Hlc::logical_time).
    pub fn from_logical_time(logical_time: u64, node_id: N) -> Self {
        let (millis, counter) = time::unpack(logical_time);
        Hlc { millis, counter, node_id }
    }

    /// Returns a new timestamp with the given fields replaced.
    ///
    /// Overrides go through the same validation as [`Hlc::new`].
    pub fn copy_with(
        &self,
        millis: Option<u64>,
        counter: Option<u32>,
        node_id: Option<N>,
    ) -> Result<Self, HlcError> {
        Self::new(
            millis.unwrap_or(self.millis),
            counter.unwrap_or(u32::from(self.counter)),
            node_id.unwrap_or_else(|| self.node_id.clone()),
        )
    }

    /// Millis and counter packed into one comparable ordinal.
    #[inline]
    pub fn logical_time(&self) -> u64 {
        time::pack(self.millis, self.counter)
    }

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub fn millis(&self) -> u64 {
        self.millis
    }

    #[inline]
    pub fn counter(&self) -> u16 {
        self.counter
    }

    #[inline]
    pub fn node_id(&self) -> &N {
        &self.node_id
    }

    /// The physical component as a UTC date.
    pub fn date_time(&self) -> DateTime<Utc> {
        // millis < 2^48 lies well inside chrono's supported range.
        DateTime::from_timestamp_millis(self.millis as i64).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl<N: NodeId> Ord for Hlc<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.logical_time()
            .cmp(&other.logical_time())
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

impl<N: NodeId> PartialOrd for Hlc<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
