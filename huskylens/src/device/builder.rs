// huskylens/src/device/builder.rs

//! Builder for `Device`.

use std::time::Duration;

use crate::device::config::DeviceConfig;
use crate::device::handle::{Connected, Device};
use crate::protocol::ReadOptions;
use crate::transport::{Transport, TransportConfig};
use crate::utils::ms;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: Option<TransportConfig>,
    options: ReadOptions,
    settle_delay: Duration,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBuilder {
    /// Strict framing, default settle delay, no transport yet.
    pub fn new() -> Self {
        Self {
            transport: None,
            config: None,
            options: ReadOptions::STRICT,
            settle_delay: ms(crate::constants::DEFAULT_SETTLE_DELAY_MS),
        }
    }

    /// Start from a full session configuration
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self::new()
            .with_config(config.transport.clone())
            .with_read_options(config.read)
            .with_settle_delay(config.settle_delay())
    }

    /// Provide an already-created transport instance (e.g. MockTransport).
    /// Takes precedence over `with_config`.
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open this transport on `build`
    pub fn with_config(mut self, config: TransportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the reader options wholesale.
    pub fn with_read_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable prefix resynchronisation, discarding at most `limit` bytes
    pub fn with_resync(mut self, limit: usize) -> Self {
        self.options.resync_limit = limit;
        self
    }

    /// Pause after each acknowledged algorithm switch. Zero disables it.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Consume the builder and return a connected Device.
    /// Requires a transport or a transport config; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Device<Connected>> {
        let transport = match (self.transport, self.config) {
            (Some(t), _) => t,
            (None, Some(config)) => config.open()?,
            (None, None) => return Err(Error::DeviceNotFound),
        };
        Ok(Device::with_options(
            transport,
            self.options,
            self.settle_delay,
        ))
    }
}
