#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use huskylens::Error;
use huskylens::protocol::{Command, Frame};

#[test]
fn set_line_tracking_matches_wire_capture() {
    let frame = Frame::build(Command::RequestAlgorithm, &[0x03, 0x00]).unwrap();
    assert_eq!(frame, fixtures::set_line_tracking_bytes());
}

#[test]
fn captured_frames_validate() {
    for raw in [
        fixtures::ack_bytes(),
        fixtures::knock_bytes(),
        fixtures::request_bytes(),
        fixtures::info_two_packets(),
        fixtures::block_160_120(),
    ] {
        Frame::validate(&raw).unwrap();
        assert_eq!(Frame::decode(&raw).unwrap().encode(), raw);
    }
}

#[test]
fn validation_order_prefix_then_checksum_then_length() {
    // Bad prefix and bad checksum: prefix wins
    let mut raw = fixtures::ack_bytes();
    raw[1] = 0xAB;
    raw[5] = 0x00;
    assert!(matches!(
        Frame::validate(&raw),
        Err(Error::InvalidPrefix { .. })
    ));

    // Bad checksum and bad length byte: checksum wins
    let mut raw = fixtures::ack_bytes();
    raw[3] = 0x04;
    assert!(matches!(
        Frame::validate(&raw),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn checksum_mismatch_reports_both_values() {
    let mut raw = fixtures::knock_bytes();
    raw[5] = 0x3D;
    match Frame::validate(&raw) {
        Err(Error::ChecksumMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 0x3C);
            assert_eq!(actual, 0x3D);
        }
        other => panic!("expected checksum mismatch, got: {:?}", other),
    }
}

#[test]
fn error_messages_include_hex_dump() {
    let err = Frame::validate(&[0x00, 0x01, 0x02, 0x03, 0x04, 0x05]).unwrap_err();
    assert!(err.to_string().contains("00 01 02"), "{}", err);
}
