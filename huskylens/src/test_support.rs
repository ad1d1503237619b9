//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize frame fixtures and a shareable MockTransport
//! so tests can inspect what a `Device` wrote after it took ownership of
//! the transport.
#![allow(dead_code)]

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::protocol::{Command, Frame};
use crate::transport::{MockTransport, Transport};
use crate::types::TransportKind;
use crate::Result;

/// Transport wrapper that delegates into `Rc<RefCell<MockTransport>>`.
/// Clone it, hand one clone to the Device and keep the other for asserts.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    /// Wrap `mock` for sharing.
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }

    /// Borrow the mock to queue input or inspect writes.
    pub fn mock(&self) -> RefMut<'_, MockTransport> {
        self.inner.borrow_mut()
    }
}

impl Transport for SharedTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().write(data)
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read(len)
    }

    fn kind(&self) -> TransportKind {
        self.inner.borrow().kind()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
}

/// The 6-byte return-ok acknowledgement
#[doc(hidden)]
pub fn ack_frame() -> Vec<u8> {
    Frame::ack_bytes()
}

/// A 16-byte return-info frame announcing `packets` detection frames
#[doc(hidden)]
pub fn info_frame(packets: u16) -> Vec<u8> {
    let mut payload = vec![0u8; crate::constants::DETECTION_PAYLOAD_LEN];
    payload[..2].copy_from_slice(&packets.to_le_bytes());
    encode(Command::ReturnInfo, &payload)
}

/// A 16-byte return-block frame with id 0
#[doc(hidden)]
pub fn block_frame(x: u16, y: u16, width: u16, height: u16) -> Vec<u8> {
    encode(Command::ReturnBlock, &fields(&[x, y, width, height, 0]))
}

/// A 16-byte return-arrow frame with id 0
#[doc(hidden)]
pub fn arrow_frame(x0: u16, y0: u16, x1: u16, y1: u16) -> Vec<u8> {
    encode(Command::ReturnArrow, &fields(&[x0, y0, x1, y1, 0]))
}

/// MockTransport pre-seeded with the given frames, boxed as a Transport.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

fn fields(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn encode(command: Command, payload: &[u8]) -> Vec<u8> {
    // Fixture payloads are far below the length limit
    Frame::new(command, payload.to_vec())
        .map(|f| f.encode())
        .unwrap_or_default()
}
