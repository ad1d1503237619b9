// huskylens/src/transport/traits.rs

//! The `Transport` abstraction.

use crate::Result;
use crate::types::TransportKind;

/// Transport trait abstracts I/O away from protocol/device logic.
///
/// The protocol is strictly request/response, so one transport must only
/// ever be driven by one `Device` at a time.
pub trait Transport {
    /// Send raw bytes to the device
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read exactly `len` bytes. Implementations return `Error::Timeout`
    /// when fewer bytes arrive within their configured read timeout; a
    /// short buffer is never returned.
    fn read(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Which kind of link this is
    fn kind(&self) -> TransportKind;

    /// Release the underlying handles. Default is a no-op for transports
    /// that hold nothing to release.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
