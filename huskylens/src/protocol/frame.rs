// huskylens/src/protocol/frame.rs

//! Wire frame encoding and validation.

use std::convert::TryFrom;

use crate::constants::{FRAME_MAX_PAYLOAD_LEN, FRAME_MIN_LEN, FRAME_PREFIX};
use crate::protocol::checksum::{checksum, verify};
use crate::protocol::command::Command;
use crate::{Error, Result};

/// HuskyLens wire frame. Provides encode/decode/validate of the frame
/// Format: [Prefix(3)] [Len(1)] [Command(1)] [Payload(n)] [Checksum(1)]
/// Prefix: 0x55 0xAA 0x11
/// Checksum: sum of every preceding byte, mod 256
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    command: Command,
    payload: Vec<u8>,
}

impl Frame {
    /// Create a frame, rejecting payloads the length byte cannot express.
    pub fn new(command: Command, payload: Vec<u8>) -> Result<Self> {
        if payload.len() > FRAME_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        Ok(Self { command, payload })
    }

    /// Command byte of the frame
    pub fn command(&self) -> Command {
        self.command
    }

    /// Bytes between the command and the checksum
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Total wire length of this frame
    pub fn wire_len(&self) -> usize {
        FRAME_MIN_LEN + self.payload.len()
    }

    /// Encode into wire bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.wire_len());
        out.extend_from_slice(&FRAME_PREFIX);
        // new() bounds the payload to one length byte
        out.push(self.payload.len() as u8);
        out.push(self.command.code());
        out.extend_from_slice(&self.payload);
        out.push(checksum(&out));
        out
    }

    /// Build the wire bytes for `command` and `payload` in one step.
    /// Output length is always `6 + payload.len()`.
    pub fn build(command: Command, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(Self::new(command, payload.to_vec())?.encode())
    }

    /// Validate framing of raw bytes without interpreting the command.
    ///
    /// Checks run in a fixed order: prefix, checksum, then length byte.
    pub fn validate(frame: &[u8]) -> Result<()> {
        if frame.len() < FRAME_PREFIX.len() || frame[..FRAME_PREFIX.len()] != FRAME_PREFIX {
            return Err(Error::InvalidPrefix {
                actual: frame[..frame.len().min(FRAME_PREFIX.len())].to_vec(),
            });
        }

        if frame.len() < FRAME_MIN_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MIN_LEN,
                actual: frame.len(),
            });
        }

        if let Err((expected, actual)) = verify(frame) {
            return Err(Error::ChecksumMismatch {
                expected,
                actual,
                frame: frame.to_vec(),
            });
        }

        let required_len = FRAME_MIN_LEN + frame[3] as usize;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }
        Ok(())
    }

    /// Decode a full wire frame
    pub fn decode(frame: &[u8]) -> Result<Self> {
        Self::validate(frame)?;
        let command = Command::try_from(frame[4])?;
        let payload = frame[5..frame.len() - 1].to_vec();
        Ok(Self { command, payload })
    }

    /// The literal acknowledgement the sensor sends for knock and
    /// set-algorithm: `55 AA 11 00 2E 3E`.
    pub fn ack_bytes() -> Vec<u8> {
        Self {
            command: Command::ReturnOk,
            payload: Vec::new(),
        }
        .encode()
    }
}
