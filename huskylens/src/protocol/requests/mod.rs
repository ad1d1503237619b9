// huskylens/src/protocol/requests/mod.rs

//! Requests the host can send.

pub mod algorithm;
pub mod detections;

pub use algorithm::encode_set_algorithm;
pub use detections::encode_by_id;

use crate::protocol::command::Command;
use crate::types::{Algorithm, ObjectId};

/// High-level Request enum. New requests should be added here and their
/// payload encoder placed in `protocol::requests::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Liveness probe, answered by return-ok
    Knock,
    /// Switch the active algorithm, answered by return-ok
    SetAlgorithm(Algorithm),
    /// Every block and arrow
    Detections,
    /// Blocks only
    Blocks,
    /// Arrows only
    Arrows,
    /// Learned objects only
    Learned,
    /// Learned blocks only
    BlocksLearned,
    /// Learned arrows only
    ArrowsLearned,
    /// Objects with this learned id
    ById(ObjectId),
    /// Blocks with this learned id
    BlocksById(ObjectId),
    /// Arrows with this learned id
    ArrowsById(ObjectId),
}

impl Request {
    /// Command byte sent for this request
    pub fn command(&self) -> Command {
        match self {
            Self::Knock => Command::RequestKnock,
            Self::SetAlgorithm(_) => Command::RequestAlgorithm,
            Self::Detections => Command::Request,
            Self::Blocks => Command::RequestBlocks,
            Self::Arrows => Command::RequestArrows,
            Self::Learned => Command::RequestLearned,
            Self::BlocksLearned => Command::RequestBlocksLearned,
            Self::ArrowsLearned => Command::RequestArrowsLearned,
            Self::ById(_) => Command::RequestById,
            Self::BlocksById(_) => Command::RequestBlocksById,
            Self::ArrowsById(_) => Command::RequestArrowsById,
        }
    }

    /// Encode the request parameters (the frame payload).
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Self::SetAlgorithm(alg) => encode_set_algorithm(*alg),
            Self::ById(id) | Self::BlocksById(id) | Self::ArrowsById(id) => encode_by_id(*id),
            Self::Knock
            | Self::Detections
            | Self::Blocks
            | Self::Arrows
            | Self::Learned
            | Self::BlocksLearned
            | Self::ArrowsLearned => Vec::new(),
        }
    }

    /// True when the sensor answers with a bare acknowledgement instead
    /// of an info frame.
    pub fn expects_ack(&self) -> bool {
        matches!(self, Self::Knock | Self::SetAlgorithm(_))
    }
}
