// huskylens/src/lib.rs

//! huskylens
//!
//! Pure Rust host-side driver for the HuskyLens vision sensor. Speaks the
//! sensor's checksummed binary frame protocol over a UART (`serial`
//! feature) or a Linux I2C bus (`i2c` feature) and decodes the blocks and
//! arrows it reports.
//!
//! ```no_run
//! use huskylens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let device = Device::open(&DeviceConfig::default())?;
//!     let mut device = device.set_mode(Algorithm::LineTracking)?;
//!     for detection in device.poll()? {
//!         println!("{}", detection);
//!     }
//!     device.close()
//! }
//! ```
#![warn(missing_docs)]

/// Wire constants and defaults
pub mod constants;
/// Sensor session
pub mod device;
pub mod error;
/// Commonly used items
pub mod prelude;
/// Frame codec and response reader
pub mod protocol;
pub mod test_support;
/// Serial, I2C and mock links
pub mod transport;
/// Value types decoded from the wire
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
