// huskylens/src/transport/mock.rs

//! In-memory transport for tests.

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::types::TransportKind;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves
/// reads from a queued byte stream, the way a serial line would.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every write, in order
    pub sent: Vec<Vec<u8>>,
    /// Bytes waiting to be read
    pub input: VecDeque<u8>,
    /// Length of every read call, in order
    pub reads: Vec<usize>,
    /// Testing hook: number of subsequent reads that should time out
    pub read_failures: usize,
    /// Set by `close`; later I/O fails
    pub closed: bool,
}

impl MockTransport {
    /// Empty mock with no queued input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent read calls should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Queue a complete response frame.
    pub fn push_response(&mut self, frame: Vec<u8>) {
        self.input.extend(frame);
    }

    /// Queue raw bytes, e.g. line noise ahead of a frame.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Bytes still waiting to be read
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Remove and return the most recent write.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::Io(std::io::ErrorKind::NotConnected.into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        self.reads.push(len);
        if self.closed {
            return Err(Error::Io(std::io::ErrorKind::NotConnected.into()));
        }
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Timeout {
                expected: len,
                received: 0,
            });
        }
        if self.input.len() < len {
            // A real line would have consumed what did arrive
            let received = self.input.len();
            self.input.clear();
            return Err(Error::Timeout {
                expected: len,
                received,
            });
        }
        Ok(self.input.drain(..len).collect())
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Mock
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
