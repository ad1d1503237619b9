// huskylens/src/protocol/requests/detections.rs

//! Payload for the by-id detection requests.

use crate::types::ObjectId;

/// Encode the payload of the request-by-id family: the id as a
/// little-endian u16.
pub fn encode_by_id(id: ObjectId) -> Vec<u8> {
    id.to_le_bytes().to_vec()
}
