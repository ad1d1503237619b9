// huskylens/src/protocol/codec.rs

//! Request encoding and sending.

use log::debug;

use crate::Result;
use crate::transport::Transport;
use crate::utils::HexBytes;

use super::Frame;
use super::requests::Request;

/// Encode a Request into a full wire frame (prefix/length/command/checksum).
pub fn encode_request(request: &Request) -> Result<Vec<u8>> {
    Frame::build(request.command(), &request.payload())
}

/// Encode `request` and write it to the transport in one write call.
pub fn send_request(transport: &mut dyn Transport, request: &Request) -> Result<()> {
    let frame = encode_request(request)?;
    debug!("-> {:?} {}", request, HexBytes(&frame));
    transport.write(&frame)
}
