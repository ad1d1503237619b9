// huskylens/src/device/mod.rs

//! Sensor session: type-state handle, builder and config.

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::{Connected, Device, ModeSet, SetModeError};
