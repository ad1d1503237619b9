// huskylens/src/device/config.rs

//! Session-level configuration

use std::time::Duration;

use crate::constants::DEFAULT_SETTLE_DELAY_MS;
use crate::protocol::ReadOptions;
use crate::transport::TransportConfig;
use crate::utils::ms;

/// Everything needed to open a session. With the `serde` feature this
/// can be deserialized from a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Link to open
    pub transport: TransportConfig,
    /// Reader behaviour
    pub read: ReadOptions,
    /// Pause after a successful algorithm switch (ms)
    pub settle_delay_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            read: ReadOptions::default(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl DeviceConfig {
    /// `settle_delay_ms` as a `Duration`
    pub fn settle_delay(&self) -> Duration {
        ms(self.settle_delay_ms)
    }
}
