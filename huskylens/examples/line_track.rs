//! Follow a line with the sensor in line-tracking mode and print every
//! arrow it reports.
//!
//! Usage:
//!   cargo run -p huskylens --example line_track -- /dev/ttyUSB0
//!   cargo run -p huskylens --example line_track --features i2c -- i2c 1

use std::time::Duration;

use anyhow::{Context, bail};
use huskylens::prelude::*;

fn config_from_args() -> anyhow::Result<TransportConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => Ok(TransportConfig::default()),
        Some("i2c") => {
            let bus = match args.get(1) {
                Some(b) => b.parse().context("i2c bus must be a number")?,
                None => huskylens::constants::DEFAULT_I2C_BUS,
            };
            Ok(TransportConfig::i2c(bus, huskylens::constants::DEFAULT_I2C_ADDRESS))
        }
        Some(path) if path.starts_with('-') => bail!("unknown option {}", path),
        Some(path) => Ok(TransportConfig::serial(path)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let device = DeviceBuilder::new()
        .with_config(config_from_args()?)
        .with_resync(64)
        .build()
        .context("opening sensor")?;
    let mut device = device
        .set_mode(Algorithm::LineTracking)
        .map_err(huskylens::Error::from)
        .context("selecting line tracking")?;
    println!("line tracking on {:?} transport", device.transport_kind());

    loop {
        match device.poll() {
            Ok(detections) if detections.is_empty() => println!("no line"),
            Ok(detections) => {
                for d in detections.iter().filter(|d| d.is_arrow()) {
                    println!("{}", d);
                }
            }
            // Nothing arrived in time; ask again
            Err(e) if e.is_timeout() => log::debug!("poll timed out: {}", e),
            Err(e) => return Err(e.into()),
        }
        std::thread::sleep(Duration::from_millis(500));
    }
}
