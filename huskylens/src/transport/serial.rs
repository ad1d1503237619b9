// huskylens/src/transport/serial.rs

//! UART transport.

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use log::{debug, trace, warn};
use serialport::SerialPort;

use crate::transport::traits::Transport;
use crate::types::TransportKind;
use crate::utils::{Deadline, HexBytes, ms};
use crate::{Error, Result};

/// UART link to the sensor. Feature-gated behind `serial` and built on
/// the `serialport` crate.
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    path: String,
    timeout: Duration,
}

impl SerialTransport {
    /// Open `path` at `baud_rate` (8N1). `timeout` bounds every `read`.
    pub fn open(path: &str, baud_rate: u32, timeout: Duration) -> Result<Self> {
        let port = serialport::new(path, baud_rate).timeout(timeout).open()?;
        debug!("opened serial port {} at {} baud", path, baud_rate);
        Ok(Self {
            port: Some(port),
            path: path.to_string(),
            timeout,
        })
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port
            .as_mut()
            .ok_or_else(|| Error::Io(ErrorKind::NotConnected.into()))
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port()?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let deadline = Deadline::after(self.timeout);
        let port = self.port()?;
        let mut buf = vec![0u8; len];
        let mut filled = 0usize;

        // The sensor may deliver a frame in several chunks, so keep
        // reading until the buffer is full or the deadline passes.
        while filled < len {
            if deadline.expired() {
                warn!("serial read timed out after {} of {} bytes", filled, len);
                return Err(Error::Timeout {
                    expected: len,
                    received: filled,
                });
            }
            port.set_timeout(deadline.remaining().max(ms(1)))?;
            match port.read(&mut buf[filled..]) {
                Ok(n) => filled += n,
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }

        trace!("serial <- {}", HexBytes(&buf));
        Ok(buf)
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Serial
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle closes the file descriptor
        if self.port.take().is_some() {
            debug!("closed serial port {}", self.path);
        }
        Ok(())
    }
}
