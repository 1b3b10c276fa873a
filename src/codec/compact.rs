//! Compact packed form: fixed-width base-36 millis and counter, then the node id.

use super::{base36, WireFormat};
use crate::error::{HlcError, ParseError};
use crate::primitives::Hlc;
use crate::types::NodeId;

const MILLIS_WIDTH: usize = 10;
const COUNTER_WIDTH: usize = 4;
const PREFIX_LEN: usize = MILLIS_WIDTH + COUNTER_WIDTH;

/// The `<millis:10><counter:4><node id>` encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct Compact;

impl WireFormat for Compact {
    fn encode<N: NodeId>(hlc: &Hlc<N>) -> String {
        format!(
            "{}{}{}",
            base36::encode_padded(hlc.millis(), MILLIS_WIDTH),
            base36::encode_padded(u64::from(hlc.counter()), COUNTER_WIDTH),
            hlc.node_id()
        )
    }

    fn decode(input: &str) -> Result<Hlc<String>, HlcError> {
        if input.len() < PREFIX_LEN {
            return Err(ParseError::TooShort { len: input.len() }.into());
        }
        let millis = input
            .get(..MILLIS_WIDTH)
            .and_then(base36::decode)
            .ok_or_else(|| ParseError::InvalidMillis(input.to_string()))?;
        let counter = input
            .get(MILLIS_WIDTH..PREFIX_LEN)
            .and_then(base36::decode)
            .ok_or_else(|| ParseError::InvalidCounter(input.to_string()))?;
        let node_id = input
            .get(PREFIX_LEN..)
            .ok_or_else(|| ParseError::InvalidNodeId(input.to_string()))?;
        // Four base-36 digits fit a u32; the range check happens in `Hlc::new`.
        Hlc::new(millis, counter as u32, node_id.to_string())
    }
}

impl<N: NodeId> Hlc<N> {
    /// Encodes the timestamp in the compact packed form.
    pub fn pack(&self) -> String {
        Compact::encode(self)
    }
}

impl Hlc<String> {
    /// Decodes the compact packed form. The node id is taken verbatim.
    pub fn unpack(packed: &str) -> Result<Self, HlcError> {
        Compact::decode(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hlc(millis: u64, counter: u32, node: &str) -> Hlc<String> {
        Hlc::new(millis, counter, node.to_string()).unwrap()
    }

    #[test]
    fn packs_fixed_width_fields() {
        assert_eq!(hlc(0, 0, "n").pack(), "00000000000000n");
        assert_eq!(hlc(1_000, 1, "node1").pack(), "00000000rs0001node1");
        assert_eq!(hlc(36, 65_535, "").pack(), "00000000101ekf");
    }

    #[test]
    fn packed_length_is_prefix_plus_node_id() {
        let packed = hlc(1_700_000_000_000, 12, "abcdefghij").pack();
        assert_eq!(packed.len(), 14 + 10);
    }

    #[test]
    fn unpack_reads_fixed_offsets() {
        assert_eq!(Hlc::unpack("00000000rs0001node1").unwrap(), hlc(1_000, 1, "node1"));
        assert_eq!(Hlc::unpack("00000000000000").unwrap(), hlc(0, 0, ""));
    }

    #[test]
    fn unpack_keeps_delimiters_in_node_id() {
        assert_eq!(Hlc::unpack("00000000rs0001a-b:c").unwrap(), hlc(1_000, 1, "a-b:c"));
    }

    #[test]
    fn unpack_rejects_short_input() {
        assert_eq!(
            Hlc::unpack("0000000000"),
            Err(HlcError::Parse(ParseError::TooShort { len: 10 }))
        );
    }

    #[test]
    fn unpack_rejects_bad_digits() {
        assert!(matches!(
            Hlc::unpack("00000000r!0001node"),
            Err(HlcError::Parse(ParseError::InvalidMillis(_)))
        ));
        assert!(matches!(
            Hlc::unpack("00000000rs00-1node"),
            Err(HlcError::Parse(ParseError::InvalidCounter(_)))
        ));
    }

    #[test]
    fn unpack_rejects_counter_out_of_range() {
        // "1ekg" is 65536
        assert_eq!(
            Hlc::unpack("00000000rs1ekgnode"),
            Err(HlcError::InvalidCounter { counter: 65_536 })
        );
    }

    proptest! {
        #[test]
        fn unpack_inverts_pack(
            millis in 0u64..(1 << 48),
            counter in 0u32..=65_535,
            node in "\\PC{0,12}",
        ) {
            let ts = Hlc::new(millis, counter, node).unwrap();
            prop_assert_eq!(Hlc::unpack(&ts.pack()).unwrap(), ts);
        }
    }
}
