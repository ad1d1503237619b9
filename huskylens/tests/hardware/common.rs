//! 共通: 実機テスト用ヘルパー
//!
//! `HUSKYLENS_PORT` (serial) または `HUSKYLENS_I2C_BUS` (i2c) が設定されて
//! いれば実機を open し、無い環境（CI 等）では `Ok(None)` を返す。
#![allow(dead_code)]

use huskylens::device::{Connected, Device, DeviceBuilder};
use huskylens::transport::TransportConfig;
use huskylens::Result;

/// センサーを開いた `Device<Connected>` を返す。
///
/// - Ok(Some(device)) : 設定があり open に成功
/// - Ok(None) : 設定が無い（CI 等では許容）
/// - Err(e) : その他の致命的なエラー
pub fn open_from_env() -> Result<Option<Device<Connected>>> {
    let config = if let Ok(path) = std::env::var("HUSKYLENS_PORT") {
        TransportConfig::serial(path)
    } else if let Ok(bus) = std::env::var("HUSKYLENS_I2C_BUS") {
        let bus = bus
            .parse()
            .map_err(|_| huskylens::Error::InvalidConfig(format!("bad i2c bus '{}'", bus)))?;
        TransportConfig::i2c(bus, huskylens::constants::DEFAULT_I2C_ADDRESS)
    } else {
        return Ok(None);
    };

    let _ = env_logger::builder().is_test(true).try_init();
    DeviceBuilder::new()
        .with_config(config)
        .with_resync(64)
        .build()
        .map(Some)
}
