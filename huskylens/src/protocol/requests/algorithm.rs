// huskylens/src/protocol/requests/algorithm.rs

//! Payload for set-algorithm.

use crate::types::Algorithm;

/// Encode the set-algorithm payload: the 2-byte little-endian selector.
pub fn encode_set_algorithm(algorithm: Algorithm) -> Vec<u8> {
    algorithm.to_le_bytes().to_vec()
}
