#[path = "common.rs"]
mod common;

use huskylens::{Algorithm, Result};
use serial_test::serial;

// These tests require a real sensor on the port named by HUSKYLENS_PORT.
// They are marked `#[ignore]` so CI does not attempt to run them. Run
// manually with:
//
// HUSKYLENS_PORT=/dev/ttyUSB0 cargo test -p huskylens --test hardware -- --ignored

#[test]
#[ignore]
#[serial]
fn knock_over_serial() -> Result<()> {
    match common::open_from_env()? {
        Some(mut device) => {
            device.knock()?;
            device.close()
        }
        None => Ok(()),
    }
}

#[test]
#[ignore]
#[serial]
fn line_tracking_poll_over_serial() -> Result<()> {
    let Some(device) = common::open_from_env()? else {
        return Ok(());
    };
    let mut device = device.set_mode(Algorithm::LineTracking)?;
    match device.poll() {
        Ok(detections) => {
            for d in &detections {
                println!("{}", d);
            }
        }
        // No line in view within the read timeout
        Err(e) if e.is_timeout() => {}
        Err(e) => return Err(e),
    }
    device.close()
}
