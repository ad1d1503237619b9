// huskylens/src/protocol/parser.rs

//! Bounds-checked field readers for frame payloads.

use crate::protocol::command::Command;
use crate::protocol::frame::Frame;
use crate::types::Point;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_le_bytes([data[idx], data[idx + 1]]))
}

/// Parse a coordinate pair (two little-endian u16) at `idx`.
pub fn point_at(data: &[u8], idx: usize) -> Result<Point> {
    Ok(Point::new(le_u16_at(data, idx)?, le_u16_at(data, idx + 2)?))
}

/// Ensure the frame carries the `expected` command. Returns
/// UnexpectedResponse on mismatch.
pub fn expect_command(frame: &Frame, expected: Command) -> Result<()> {
    let actual = frame.command();
    if actual != expected {
        return Err(Error::UnexpectedResponse {
            expected: expected.code(),
            actual: actual.code(),
        });
    }
    Ok(())
}
