#[path = "common.rs"]
mod common;

use huskylens::{Algorithm, Result};
use serial_test::serial;

// Requires a sensor on the bus named by HUSKYLENS_I2C_BUS:
//
// HUSKYLENS_I2C_BUS=1 cargo test -p huskylens --test hardware --features i2c -- --ignored

#[test]
#[ignore]
#[serial]
fn set_mode_over_i2c() -> Result<()> {
    let Some(device) = common::open_from_env()? else {
        return Ok(());
    };
    let device = device.set_mode(Algorithm::TagRecognition)?;
    assert_eq!(device.algorithm(), Algorithm::TagRecognition);
    device.close()
}
