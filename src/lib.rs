#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Hybrid logical clock timestamps.
//!
//! An [`Hlc`] combines wall-clock milliseconds with a 16-bit logical counter
//! and a node identifier. Nodes thread one canonical timestamp through
//! [`Hlc::send`] and [`Hlc::receive`] to obtain a total order of events that
//! never runs backwards and stays within a minute of physical time, without
//! requiring synchronized clocks.
//!
//! ```
//! use hlc_core::Hlc;
//!
//! let canonical = Hlc::zero("node1".to_string());
//! let first = canonical.send_at(1_000).unwrap();
//! let second = first.send_at(1_000).unwrap();
//! assert_eq!((second.millis(), second.counter()), (1_000, 1));
//!
//! let wire = second.to_string();
//! assert_eq!(wire, "1970-01-01T00:00:01.000Z-0001-node1");
//! assert_eq!(wire.parse::<Hlc<String>>().unwrap(), second);
//! assert_eq!(Hlc::unpack(&second.pack()).unwrap(), second);
//! ```
//!
//! The crate never stores the canonical timestamp itself. Callers keep it in
//! whatever concurrency-safe place suits them, or use
//! [`protocol::CanonicalClock`].

// Protocol constants and the node id capability.
pub mod types;

// The timestamp value type.
pub mod primitives;

pub use primitives::Hlc;

// Wall clock source and logical-time packing.
pub mod time;

// send / receive.
pub mod protocol;

// Extended string and compact packed encodings.
pub mod codec;

pub mod node;

pub mod error;

pub use error::{HlcError, ParseError};
pub use node::random_node_id;
pub use time::{Clock, SystemClock};
pub use types::NodeId;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
