// huskylens/src/constants.rs
//! Common protocol constants used across the crate

/// Wire frame prefix: 0x55 0xAA 0x11
pub const FRAME_PREFIX: [u8; 3] = [0x55, 0xAA, 0x11];

/// Prefix(3) + length(1) + command(1)
pub const FRAME_HEADER_LEN: usize = 5;

/// Minimal frame length: header plus checksum, empty payload
pub const FRAME_MIN_LEN: usize = FRAME_HEADER_LEN + 1;

/// Maximum payload length representable by the length byte
pub const FRAME_MAX_PAYLOAD_LEN: usize = 255;

/// Acknowledgement (return-ok) frames carry no payload
pub const ACK_FRAME_LEN: usize = FRAME_MIN_LEN;

/// Info and detection frames carry five little-endian u16 fields
pub const DETECTION_PAYLOAD_LEN: usize = 10;
/// Wire length of an info or detection frame
pub const DETECTION_FRAME_LEN: usize = FRAME_MIN_LEN + DETECTION_PAYLOAD_LEN;

/// Defaults used by the serial transport
pub const DEFAULT_SERIAL_PATH: &str = "/dev/ttyS0";
/// Serial baud rate the sensor ships with
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Defaults used by the I2C transport
pub const DEFAULT_I2C_BUS: u8 = 1;
/// Factory I2C address of the sensor
pub const DEFAULT_I2C_ADDRESS: u16 = 0x32;
/// Largest 7-bit I2C address
pub const I2C_ADDRESS_MAX: u16 = 0x7F;

/// Time the sensor needs after an algorithm switch before it answers polls
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;
