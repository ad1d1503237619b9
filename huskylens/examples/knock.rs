//! Check that a sensor answers on the given serial port, then print one
//! frame of detections for each algorithm, or only for the algorithms
//! named after the port.
//!
//! Usage:
//!   cargo run -p huskylens --example knock -- /dev/ttyUSB0
//!   cargo run -p huskylens --example knock -- /dev/ttyUSB0 line tag

use huskylens::{Algorithm, Device, DeviceConfig, Frame, TransportConfig, utils};

fn main() -> huskylens::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = DeviceConfig {
        transport: args
            .next()
            .map(TransportConfig::serial)
            .unwrap_or_default(),
        ..DeviceConfig::default()
    };
    let mut algorithms = args
        .map(|name| name.parse::<Algorithm>())
        .collect::<huskylens::Result<Vec<_>>>()?;
    if algorithms.is_empty() {
        algorithms = Algorithm::ALL.to_vec();
    }

    let mut device = Device::open(&config)?;
    device.knock()?;
    println!(
        "sensor answered knock ({})",
        utils::bytes_to_hex_spaced(&Frame::ack_bytes())
    );

    let mut device = device.set_mode(algorithms[0])?;
    for alg in algorithms {
        device.set_mode(alg)?;
        match device.poll_with_info() {
            Ok((info, detections)) => {
                println!(
                    "{}: frame {} ids {} -> {} detections",
                    alg,
                    info.frame_number,
                    info.id_count,
                    detections.len()
                );
            }
            Err(e) => println!("{}: {}", alg, e),
        }
    }
    device.close()
}
