// huskylens/src/transport/mod.rs

//! Byte links to the sensor.

pub mod config;
#[cfg(all(feature = "i2c", target_os = "linux"))]
pub mod i2c;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use config::TransportConfig;
#[cfg(all(feature = "i2c", target_os = "linux"))]
pub use i2c::I2cTransport;
pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::Transport;
