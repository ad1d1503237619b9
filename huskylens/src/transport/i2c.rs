// huskylens/src/transport/i2c.rs

//! Linux I2C transport.

#![cfg(all(feature = "i2c", target_os = "linux"))]

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use log::{debug, trace};

use crate::constants::I2C_ADDRESS_MAX;
use crate::transport::traits::Transport;
use crate::types::TransportKind;
use crate::utils::HexBytes;
use crate::{Error, Result};

/// Linux I2C character device bound to the sensor's 7-bit address.
///
/// The kernel offers no read timeout on I2C, so a sensor that stops
/// answering blocks `read` until the bus driver gives up.
pub struct I2cTransport {
    dev: Option<LinuxI2CDevice>,
    bus: u8,
    address: u16,
}

impl I2cTransport {
    /// Open `/dev/i2c-<bus>` and bind it to `address`.
    pub fn open(bus: u8, address: u16) -> Result<Self> {
        if address > I2C_ADDRESS_MAX {
            return Err(Error::InvalidConfig(format!(
                "i2c address {:#04x} is not a 7-bit address",
                address
            )));
        }
        let path = format!("/dev/i2c-{}", bus);
        let dev = LinuxI2CDevice::new(&path, address)?;
        debug!("opened {} at address {:#04x}", path, address);
        Ok(Self {
            dev: Some(dev),
            bus,
            address,
        })
    }

    fn dev(&mut self) -> Result<&mut LinuxI2CDevice> {
        self.dev
            .as_mut()
            .ok_or_else(|| Error::Io(std::io::ErrorKind::NotConnected.into()))
    }
}

impl Transport for I2cTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.dev()?.write(data)?;
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.dev()?.read(&mut buf)?;
        trace!("i2c <- {}", HexBytes(&buf));
        Ok(buf)
    }

    fn kind(&self) -> TransportKind {
        TransportKind::I2c
    }

    fn close(&mut self) -> Result<()> {
        if self.dev.take().is_some() {
            debug!("closed /dev/i2c-{} at address {:#04x}", self.bus, self.address);
        }
        Ok(())
    }
}
