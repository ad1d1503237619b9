#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use huskylens::device::DeviceBuilder;
use huskylens::test_support::{SharedTransport, block_frame, info_frame};
use huskylens::{Algorithm, Error, ErrorKind};

#[test]
fn truncated_detection_is_a_timeout() {
    let mut partial = block_frame(1, 1, 1, 1);
    partial.truncate(10);
    let (device, _) = common::mock_device(vec![fixtures::ack_bytes(), info_frame(1), partial]);
    let mut device = device.set_mode(Algorithm::ObjectTracking).unwrap();
    let err = device.poll().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    match err {
        Error::Timeout { expected, received } => {
            assert_eq!(expected, 16);
            assert_eq!(received, 10);
        }
        other => panic!("expected timeout, got: {:?}", other),
    }
}

#[test]
fn session_survives_a_timeout() {
    let (device, shared) = common::mock_device(vec![fixtures::ack_bytes()]);
    let mut device = device.set_mode(Algorithm::LineTracking).unwrap();
    assert!(device.poll().unwrap_err().is_timeout());

    shared.mock().push_response(info_frame(0));
    assert!(device.poll().unwrap().is_empty());
}

#[test]
fn corrupt_detection_checksum_is_protocol_error() {
    let mut bad = block_frame(5, 6, 7, 8);
    bad[15] = bad[15].wrapping_add(1);
    let (device, _) = common::mock_device(vec![fixtures::ack_bytes(), info_frame(1), bad]);
    let mut device = device.set_mode(Algorithm::ObjectTracking).unwrap();
    let err = device.poll().unwrap_err();
    assert!(err.is_protocol());
    assert!(matches!(err, Error::ChecksumMismatch { .. }));
}

#[test]
fn strict_device_rejects_noise_resync_device_skips_it() {
    let (device, _) = common::mock_device(vec![vec![0xFF], fixtures::ack_bytes()]);
    match device.set_mode(Algorithm::LineTracking) {
        Err(err) => assert!(matches!(err.error(), Error::InvalidPrefix { .. })),
        Ok(_) => panic!("strict framing accepted leading noise"),
    }

    let shared = SharedTransport::default();
    shared.mock().push_bytes(&[0xFF]);
    shared.mock().push_response(fixtures::ack_bytes());
    shared.mock().push_bytes(&[0x00, 0x55]);
    shared.mock().push_response(info_frame(1));
    shared.mock().push_response(block_frame(9, 9, 9, 9));
    let device = DeviceBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .with_resync(16)
        .build()
        .unwrap();
    let mut device = device.set_mode(Algorithm::LineTracking).unwrap();
    assert_eq!(device.poll().unwrap().len(), 1);
}
