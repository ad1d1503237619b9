// huskylens/src/protocol/responses/detection.rs

//! Block and arrow frames.

use crate::constants::DETECTION_PAYLOAD_LEN;
use crate::protocol::command::Command;
use crate::protocol::frame::Frame;
use crate::protocol::parser::{ensure_len, le_u16_at, point_at};
use crate::types::{Detection, DetectionKind, ObjectId};
use crate::{Error, Result};

/// Decode one detection frame.
///
/// Payload layout (little-endian u16): start.x, start.y, end.x, end.y, id.
/// For a block, start is the center and end holds width and height. For
/// an arrow, start is the origin and end the target.
pub fn decode_detection(frame: &Frame) -> Result<Detection> {
    let kind = match frame.command() {
        Command::ReturnBlock => DetectionKind::Block,
        Command::ReturnArrow => DetectionKind::Arrow,
        other => {
            return Err(Error::UnexpectedResponse {
                expected: Command::ReturnBlock.code(),
                actual: other.code(),
            });
        }
    };

    let data = frame.payload();
    ensure_len(data, DETECTION_PAYLOAD_LEN)?;
    Ok(Detection {
        kind,
        start: point_at(data, 0)?,
        end: point_at(data, 4)?,
        id: ObjectId::new(le_u16_at(data, 8)?),
    })
}
