// huskylens/src/protocol/responses/mod.rs

//! Responses the sensor sends back.

pub mod detection;
pub mod info;

pub use detection::decode_detection;
pub use info::decode_info;

use crate::protocol::command::Command;
use crate::protocol::frame::Frame;
use crate::types::{Detection, InfoHeader};

/// High-level Response enum produced by `reader::read_response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A return-ok frame, passed through unchanged
    Ack(Frame),
    /// A return-info frame and the detection frames it announced
    Detections {
        /// Decoded info header
        info: InfoHeader,
        /// One entry per announced frame, in arrival order
        detections: Vec<Detection>,
    },
    /// Any other known command, as a single frame
    Single(Frame),
}

impl Response {
    /// Command of the first frame of the response.
    pub fn command(&self) -> Command {
        match self {
            Response::Ack(frame) | Response::Single(frame) => frame.command(),
            Response::Detections { .. } => Command::ReturnInfo,
        }
    }
}
