//! Human-readable form: `<ISO-8601 UTC>-<counter as 4 uppercase hex digits>-<node id>`.
//!
//! Example: `2023-11-14T22:13:20.000Z-002A-node1`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::WireFormat;
use crate::error::{HlcError, ParseError};
use crate::primitives::Hlc;
use crate::types::NodeId;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const ISO_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// The `<ISO date>-<hex counter>-<node id>` encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct Extended;

impl WireFormat for Extended {
    fn encode<N: NodeId>(hlc: &Hlc<N>) -> String {
        hlc.to_string()
    }

    fn decode(input: &str) -> Result<Hlc<String>, HlcError> {
        Hlc::parse_with(input, |id| Ok::<_, std::convert::Infallible>(id.to_string()))
    }
}

impl<N: NodeId> fmt::Display for Hlc<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04X}-{}",
            self.date_time().format(ISO_FORMAT),
            self.counter(),
            self.node_id()
        )
    }
}

/// Splits an extended string into its date, counter and node id parts.
///
/// The date never contains `-` after the hours/minutes colon, so the first
/// `-` past that colon ends the date and the next one ends the counter.
/// Anything after the second delimiter belongs to the node id, which may
/// itself contain `-` or `:`.
fn split(input: &str) -> Result<(&str, &str, &str), ParseError> {
    let colon = input.find(':').ok_or(ParseError::MissingDelimiter("counter"))?;
    let counter_dash = input[colon..]
        .find('-')
        .map(|i| colon + i)
        .ok_or(ParseError::MissingDelimiter("counter"))?;
    let rest = &input[counter_dash + 1..];
    let node_dash = rest.find('-').ok_or(ParseError::MissingDelimiter("node id"))?;
    Ok((&input[..counter_dash], &rest[..node_dash], &rest[node_dash + 1..]))
}

impl<N: NodeId> Hlc<N> {
    /// Parses the extended form, decoding the node id with `decode_node_id`.
    pub fn parse_with<F, E>(input: &str, decode_node_id: F) -> Result<Self, HlcError>
    where
        F: FnOnce(&str) -> Result<N, E>,
        E: fmt::Display,
    {
        let (date, counter, node_id) = split(input)?;

        let date = NaiveDateTime::parse_from_str(date, ISO_PARSE_FORMAT)
            .map_err(|e| ParseError::InvalidDate(format!("{date}: {e}")))?
            .and_utc();
        if counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidCounter(counter.to_string()).into());
        }
        let counter = u32::from_str_radix(counter, 16)
            .map_err(|e| ParseError::InvalidCounter(format!("{counter}: {e}")))?;
        let node_id = decode_node_id(node_id).map_err(|e| ParseError::InvalidNodeId(e.to_string()))?;

        Hlc::from_date(date, node_id)?.copy_with(None, Some(counter), None)
    }
}

impl<N> Hlc<N>
where
    N: NodeId + FromStr,
    N::Err: fmt::Display,
{
    /// Parses the extended form using the node id's `FromStr`.
    pub fn parse(input: &str) -> Result<Self, HlcError> {
        Self::parse_with(input, N::from_str)
    }
}

impl<N> FromStr for Hlc<N>
where
    N: NodeId + FromStr,
    N::Err: fmt::Display,
{
    type Err = HlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<N: NodeId> Serialize for Hlc<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, N> Deserialize<'de> for Hlc<N>
where
    N: NodeId + FromStr,
    N::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
