//! Random node identifiers.

use rand_core::{CryptoRng, OsRng, RngCore};

use crate::codec::base36;

/// Length of a generated node id.
pub const NODE_ID_LEN: usize = 10;

/// Draws a fresh 10-character base-36 node id from the OS random source.
///
/// Collisions are possible (roughly 1 in 2.8e12); a node that meets its own
/// id on a newer remote timestamp gets [`HlcError::DuplicateNode`] from
/// `receive`.
///
/// [`HlcError::DuplicateNode`]: crate::error::HlcError::DuplicateNode
pub fn random_node_id() -> String {
    random_node_id_with(&mut OsRng)
}

/// Like [`random_node_id`], drawing from `rng`.
pub fn random_node_id_with<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    let high = base36::encode(u64::from(rng.next_u32()));
    let low = base36::encode(u64::from(rng.next_u32()));
    let joined = format!("{high}{low}");
    format!("{joined:0>width$}", width = NODE_ID_LEN)
        .chars()
        .take(NODE_ID_LEN)
        .collect()
}
