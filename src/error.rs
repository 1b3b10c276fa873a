//!
//! Defines error types for timestamp construction, the synchronization
//! protocol and the two wire formats.

/// Errors raised while building a timestamp or running `send`/`receive`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HlcError {
    /// The counter does not fit in 16 bits.
    #[error("Counter {counter} exceeds the 16-bit range")]
    InvalidCounter { counter: u32 },
    /// The timestamp is further ahead of the local wall clock than the maximum drift.
    #[error("Clock drift of {drift} ms exceeds the maximum allowed drift")]
    ClockDrift { drift: i64 },
    /// More than 65536 logical ticks within one physical millisecond.
    #[error("Counter overflow: {counter} ticks within a single millisecond")]
    CounterOverflow { counter: u32 },
    /// A newer remote timestamp carries the local node's own identifier.
    #[error("Duplicate node id: {node_id}")]
    DuplicateNode { node_id: String },
    /// Even after microsecond normalization the value does not fit 48 bits.
    #[error("Millisecond value {millis} is out of range")]
    MillisOutOfRange { millis: u64 },
    /// The source date lies before the Unix epoch.
    #[error("Date is {millis} ms before the Unix epoch")]
    PreEpoch { millis: i64 },
    /// A wire-format string could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl HlcError {
    /// Returns true when retrying after the wall clock advances may succeed.
    ///
    /// A counter overflow clears on the next millisecond, and a local send
    /// rejected for drift clears once physical time catches up. Everything
    /// else describes a bad value or a misconfigured node.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::CounterOverflow { .. } | Self::ClockDrift { .. })
    }
}

/// Errors raised by the extended string and compact packed parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is shorter than the fixed-width prefix of the compact form.
    #[error("Input of {len} bytes is too short")]
    TooShort { len: usize },
    /// A `-` separator of the extended form could not be located.
    #[error("Missing delimiter before {0}")]
    MissingDelimiter(&'static str),
    /// The ISO-8601 part is not a valid UTC timestamp.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    /// The counter digits are not valid in the expected radix.
    #[error("Invalid counter: {0}")]
    InvalidCounter(String),
    /// The base-36 millisecond digits are invalid.
    #[error("Invalid millis: {0}")]
    InvalidMillis(String),
    /// The node id decoder rejected its input.
    #[error("Invalid node id: {0}")]
    InvalidNodeId(String),
}
