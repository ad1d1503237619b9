use huskylens::constants::{DEFAULT_I2C_ADDRESS, DEFAULT_I2C_BUS};
use huskylens::device::{DeviceBuilder, DeviceConfig};
use huskylens::transport::TransportConfig;
use huskylens::Error;

#[test]
fn invalid_configs_are_rejected_before_opening() {
    let bad = [
        TransportConfig::serial(""),
        TransportConfig::Serial {
            path: "/dev/ttyUSB0".into(),
            baud_rate: 0,
            timeout_ms: 500,
        },
        TransportConfig::i2c(1, 0x80),
    ];
    for cfg in bad {
        assert!(matches!(cfg.open(), Err(Error::InvalidConfig(_))), "{:?}", cfg);
    }
}

#[test]
fn default_i2c_settings() {
    assert_eq!(
        TransportConfig::default_i2c(),
        TransportConfig::I2c {
            bus: DEFAULT_I2C_BUS,
            address: DEFAULT_I2C_ADDRESS,
        }
    );
    TransportConfig::default_i2c().validate().unwrap();
}

#[cfg(not(all(feature = "i2c", target_os = "linux")))]
#[test]
fn i2c_without_feature_is_unsupported() {
    assert!(matches!(
        TransportConfig::default_i2c().open(),
        Err(Error::UnsupportedOperation(_))
    ));
}

#[test]
fn missing_serial_port_fails_to_build() {
    let config = DeviceConfig {
        transport: TransportConfig::serial("/dev/huskylens-does-not-exist"),
        ..DeviceConfig::default()
    };
    assert!(DeviceBuilder::from_config(&config).build().is_err());
}
