// huskylens/src/protocol/responses/info.rs

//! Return-info header.

use crate::protocol::parser::le_u16_at;
use crate::types::InfoHeader;
use crate::Result;

/// Decode the payload of a return-info frame.
///
/// Layout (little-endian u16): packet count, id count, frame number.
/// The frame number is optional so short info payloads from older
/// firmware still decode.
pub fn decode_info(payload: &[u8]) -> Result<InfoHeader> {
    let packet_count = le_u16_at(payload, 0)?;
    let id_count = le_u16_at(payload, 2)?;
    let frame_number = le_u16_at(payload, 4).unwrap_or(0);
    Ok(InfoHeader {
        packet_count,
        id_count,
        frame_number,
    })
}
