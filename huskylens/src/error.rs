// huskylens/src/error.rs

//! Crate error type.

use thiserror::Error;

use crate::utils::bytes_to_hex_spaced;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No transport was given or configured
    #[error("device not found")]
    DeviceNotFound,

    /// Transport-level I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // 実機 transport は feature で有効化する
    /// Opening or configuring the serial port failed
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    /// The I2C character device failed
    #[cfg(all(feature = "i2c", target_os = "linux"))]
    #[error("i2c error: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),

    /// Fewer bytes than requested arrived before the read timeout
    #[error("operation timed out: expected {expected} bytes, got {received}")]
    Timeout {
        /// Bytes requested
        expected: usize,
        /// Bytes that did arrive
        received: usize,
    },

    /// Frame did not start with `55 AA 11`
    #[error("invalid frame prefix: [{}]", bytes_to_hex_spaced(.actual))]
    InvalidPrefix {
        /// The first bytes of the frame as received
        actual: Vec<u8>,
    },

    /// Trailing byte is not the sum of the preceding bytes
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x} in [{}]", bytes_to_hex_spaced(.frame))]
    ChecksumMismatch {
        /// Sum of the preceding bytes
        expected: u8,
        /// Trailing byte as received
        actual: u8,
        /// The whole frame
        frame: Vec<u8>,
    },

    /// Length byte, payload size or read length out of range
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required or maximum length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// Command byte outside 0x20..=0x2E
    #[error("unknown command byte {0:#04x}")]
    UnknownCommand(u8),

    /// Knock or set-algorithm was answered with something other than return-ok
    #[error("unexpected acknowledgement: expected [{}], got [{}]", bytes_to_hex_spaced(.expected), bytes_to_hex_spaced(.actual))]
    UnexpectedAck {
        /// `55 AA 11 00 2E 3E`
        expected: Vec<u8>,
        /// Frame received instead
        actual: Vec<u8>,
    },

    /// Resync limit reached without finding a frame prefix
    #[error("lost frame sync: no prefix within {discarded} discarded bytes")]
    ResyncFailed {
        /// Bytes dropped before giving up
        discarded: usize,
    },

    /// Well-formed reply of the wrong kind for the request
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Command byte the request called for
        expected: u8,
        /// Command byte received
        actual: u8,
    },

    /// Rejected transport or device settings
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Request not valid here, or transport feature not compiled in
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Coarse classification callers use to pick a recovery strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The transport did not deliver the expected bytes in time. Retry the request.
    Timeout,
    /// Received bytes violated the framing rules. The stream may be desynchronised.
    Protocol,
    /// Anything else: configuration, I/O, or a reply that does not fit the request.
    Driver,
}

impl Error {
    /// Classify for retry decisions
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::InvalidPrefix { .. }
            | Error::ChecksumMismatch { .. }
            | Error::InvalidLength { .. }
            | Error::UnknownCommand(_)
            | Error::UnexpectedAck { .. }
            | Error::ResyncFailed { .. } => ErrorKind::Protocol,
            _ => ErrorKind::Driver,
        }
    }

    /// True for `ErrorKind::Timeout`
    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }

    /// True for framing errors
    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
