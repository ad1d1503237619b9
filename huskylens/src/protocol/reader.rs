// huskylens/src/protocol/reader.rs

//! Pulls validated frames off a transport and assembles responses.
//!
//! The first frame of a response is read header-first because its size
//! depends on the command. An info frame announces how many fixed-size
//! detection frames follow, and that count is the only source for how
//! many more frames to read.

use log::{trace, warn};

use crate::constants::{DETECTION_FRAME_LEN, FRAME_HEADER_LEN, FRAME_MIN_LEN, FRAME_PREFIX};
use crate::protocol::command::Command;
use crate::protocol::frame::Frame;
use crate::protocol::responses::{Response, decode_detection, decode_info};
use crate::transport::Transport;
use crate::utils::HexBytes;
use crate::{Error, Result};

/// Reader behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadOptions {
    /// Maximum number of bytes to discard while hunting for a frame
    /// prefix after a desync. Zero keeps strict framing: a bad prefix is
    /// reported as `InvalidPrefix` straight away.
    pub resync_limit: usize,
}

impl ReadOptions {
    /// No resynchronisation (the default)
    pub const STRICT: Self = Self { resync_limit: 0 };

    /// Discard at most `limit` bytes while looking for a prefix
    pub fn with_resync(limit: usize) -> Self {
        Self {
            resync_limit: limit,
        }
    }
}

/// Read exactly `frame_len` bytes and validate prefix and checksum.
/// Returns the raw validated frame.
pub fn read_frame(transport: &mut dyn Transport, frame_len: usize) -> Result<Vec<u8>> {
    read_frame_with(transport, frame_len, ReadOptions::STRICT)
}

/// `read_frame` honouring `options`.
pub fn read_frame_with(
    transport: &mut dyn Transport,
    frame_len: usize,
    options: ReadOptions,
) -> Result<Vec<u8>> {
    if frame_len < FRAME_MIN_LEN {
        return Err(Error::InvalidLength {
            expected: FRAME_MIN_LEN,
            actual: frame_len,
        });
    }

    let frame = if options.resync_limit == 0 {
        transport.read(frame_len)?
    } else {
        let mut frame = sync_to_prefix(transport, options.resync_limit)?;
        frame.extend(transport.read(frame_len - FRAME_PREFIX.len())?);
        frame
    };

    trace!("<- {}", HexBytes(&frame));
    Frame::validate(&frame)?;
    Ok(frame)
}

/// Read one frame whose size is not known in advance: the 5 header bytes
/// first, then the announced payload and the checksum.
pub fn read_next_frame(transport: &mut dyn Transport, options: ReadOptions) -> Result<Frame> {
    let mut raw = if options.resync_limit == 0 {
        let header = transport.read(FRAME_HEADER_LEN)?;
        if header[..FRAME_PREFIX.len()] != FRAME_PREFIX {
            return Err(Error::InvalidPrefix {
                actual: header[..FRAME_PREFIX.len()].to_vec(),
            });
        }
        header
    } else {
        let mut header = sync_to_prefix(transport, options.resync_limit)?;
        header.extend(transport.read(FRAME_HEADER_LEN - FRAME_PREFIX.len())?);
        header
    };

    let len = raw[3] as usize;
    raw.extend(transport.read(len + 1)?);
    trace!("<- {}", HexBytes(&raw));
    Frame::decode(&raw)
}

/// Read a complete response.
///
/// - return-ok: the acknowledgement frame, nothing more is read
/// - return-info: exactly `packet_count` further detection frames
/// - anything else: the single frame as received
pub fn read_response(transport: &mut dyn Transport, options: ReadOptions) -> Result<Response> {
    let first = read_next_frame(transport, options)?;
    match first.command() {
        Command::ReturnOk => Ok(Response::Ack(first)),
        Command::ReturnInfo => {
            let info = decode_info(first.payload())?;
            let mut detections = Vec::with_capacity(info.packet_count as usize);
            for _ in 0..info.packet_count {
                let raw = read_frame_with(transport, DETECTION_FRAME_LEN, options)?;
                detections.push(decode_detection(&Frame::decode(&raw)?)?);
            }
            Ok(Response::Detections { info, detections })
        }
        _ => Ok(Response::Single(first)),
    }
}

/// Consume bytes until the frame prefix has been read. Returns the prefix.
/// Fails with `ResyncFailed` once more than `limit` bytes were discarded.
fn sync_to_prefix(transport: &mut dyn Transport, limit: usize) -> Result<Vec<u8>> {
    let mut window = transport.read(FRAME_PREFIX.len())?;
    let mut discarded = 0usize;
    while window[..] != FRAME_PREFIX {
        if discarded >= limit {
            return Err(Error::ResyncFailed { discarded });
        }
        window.remove(0);
        window.extend(transport.read(1)?);
        discarded += 1;
    }
    if discarded > 0 {
        warn!("resynchronised after discarding {} bytes", discarded);
    }
    Ok(window)
}
