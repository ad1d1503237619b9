// huskylens/src/prelude.rs

//! Commonly used items: `use huskylens::prelude::*;`

pub use crate::device::{Connected, Device, DeviceBuilder, DeviceConfig, ModeSet, SetModeError};
pub use crate::protocol::{Command, Frame, ReadOptions, Request, Response};
pub use crate::transport::{Transport, TransportConfig};
pub use crate::{
    Algorithm, Detection, DetectionKind, Error, ErrorKind, InfoHeader, ObjectId, Point, Result,
    TransportKind,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms};
