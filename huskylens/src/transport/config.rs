// huskylens/src/transport/config.rs

//! Transport selection and its settings.

use crate::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_I2C_ADDRESS, DEFAULT_I2C_BUS, DEFAULT_SERIAL_PATH, I2C_ADDRESS_MAX,
};
use crate::transport::traits::Transport;
use crate::utils::DEFAULT_READ_TIMEOUT_MS;
use crate::{Error, Result};

/// Which link to open and how. With the `serde` feature this can be
/// loaded from a config file, e.g. `{ "mode": "i2c", "bus": 1, "address": 50 }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "kebab-case"))]
pub enum TransportConfig {
    /// UART device
    Serial {
        /// Device node, e.g. `/dev/ttyUSB0`
        path: String,
        baud_rate: u32,
        /// Bound on each `read` call
        timeout_ms: u64,
    },
    /// Linux `/dev/i2c-<bus>` with a 7-bit address
    I2c {
        bus: u8,
        address: u16,
    },
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::serial(DEFAULT_SERIAL_PATH)
    }
}

impl TransportConfig {
    /// Serial link with the default baud rate and read timeout
    pub fn serial(path: impl Into<String>) -> Self {
        Self::Serial {
            path: path.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }

    /// I2C link on `bus` at `address`
    pub fn i2c(bus: u8, address: u16) -> Self {
        Self::I2c { bus, address }
    }

    /// I2C link on the default bus and address
    pub fn default_i2c() -> Self {
        Self::i2c(DEFAULT_I2C_BUS, DEFAULT_I2C_ADDRESS)
    }

    /// Reject settings no transport could open with.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Serial {
                path,
                baud_rate,
                timeout_ms,
            } => {
                if path.is_empty() {
                    return Err(Error::InvalidConfig("empty serial device path".into()));
                }
                if *baud_rate == 0 {
                    return Err(Error::InvalidConfig("baud rate must be nonzero".into()));
                }
                if *timeout_ms == 0 {
                    return Err(Error::InvalidConfig("read timeout must be nonzero".into()));
                }
            }
            Self::I2c { address, .. } => {
                if *address > I2C_ADDRESS_MAX {
                    return Err(Error::InvalidConfig(format!(
                        "i2c address {:#04x} is not a 7-bit address",
                        address
                    )));
                }
            }
        }
        Ok(())
    }

    /// Open the configured transport. Variants whose cargo feature is not
    /// compiled in fail with `UnsupportedOperation`.
    pub fn open(&self) -> Result<Box<dyn Transport>> {
        self.validate()?;
        match self {
            Self::Serial {
                path,
                baud_rate,
                timeout_ms,
            } => open_serial(path, *baud_rate, *timeout_ms),
            Self::I2c { bus, address } => open_i2c(*bus, *address),
        }
    }
}

#[cfg(feature = "serial")]
fn open_serial(path: &str, baud_rate: u32, timeout_ms: u64) -> Result<Box<dyn Transport>> {
    let t = crate::transport::serial::SerialTransport::open(
        path,
        baud_rate,
        crate::utils::ms(timeout_ms),
    )?;
    Ok(Box::new(t))
}

#[cfg(not(feature = "serial"))]
fn open_serial(_path: &str, _baud_rate: u32, _timeout_ms: u64) -> Result<Box<dyn Transport>> {
    Err(Error::UnsupportedOperation(
        "serial transport requires the `serial` feature".into(),
    ))
}

#[cfg(all(feature = "i2c", target_os = "linux"))]
fn open_i2c(bus: u8, address: u16) -> Result<Box<dyn Transport>> {
    Ok(Box::new(crate::transport::i2c::I2cTransport::open(
        bus, address,
    )?))
}

#[cfg(not(all(feature = "i2c", target_os = "linux")))]
fn open_i2c(_bus: u8, _address: u16) -> Result<Box<dyn Transport>> {
    Err(Error::UnsupportedOperation(
        "i2c transport requires the `i2c` feature on Linux".into(),
    ))
}
