//!
//! Wire formats for timestamps.
//!
//! Two encodings are supported, both of which round-trip any timestamp with
//! a string node id:
//! - [`Extended`]: `<ISO-8601 UTC>-<4 hex digit counter>-<node id>`, readable
//!   and suitable for database columns.
//! - [`Compact`]: 10 base-36 digits of millis, 4 base-36 digits of counter,
//!   then the node id. Fixed offsets, no delimiter scanning.

use crate::error::HlcError;
use crate::primitives::Hlc;
use crate::types::NodeId;

/// Trait for a timestamp encoding.
///
/// Decoding always yields a `String` node id; use
/// [`Hlc::parse_with`] to decode other node id types from the extended form.
pub trait WireFormat {
    /// Encodes the timestamp.
    fn encode<N: NodeId>(hlc: &Hlc<N>) -> String;

    /// Decodes a timestamp previously produced by [`WireFormat::encode`].
    fn decode(input: &str) -> Result<Hlc<String>, HlcError>;
}

pub(crate) mod base36;

// Human-readable form
pub mod extended;

pub use extended::Extended;

// Fixed-width packed form
pub mod compact;

pub use compact::Compact;
