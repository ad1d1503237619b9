#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use huskylens::protocol::Request;
use huskylens::test_support::{arrow_frame, block_frame, info_frame};
use huskylens::{Algorithm, DetectionKind, ObjectId, Point};

#[test]
fn poll_two_detections_leaves_rest_of_stream() {
    let (device, shared) = common::mock_device(vec![
        fixtures::ack_bytes(),
        fixtures::info_two_packets(),
        fixtures::block_160_120(),
        fixtures::arrow_0_10(),
        fixtures::block_160_120(),
    ]);
    let mut device = device.set_mode(Algorithm::ObjectTracking).unwrap();
    let detections = device.poll().unwrap();

    assert_eq!(detections.len(), 2);
    assert!(detections[0].is_block());
    assert_eq!(detections[0].start, Point::new(160, 120));
    assert_eq!(detections[0].size(), Some((20, 30)));
    assert!(detections[1].is_arrow());
    assert_eq!(detections[1].end, Point::new(300, 200));
    assert_eq!(shared.mock().remaining(), 16);
    assert_eq!(shared.mock().sent.last(), Some(&fixtures::request_bytes()));
}

#[test]
fn poll_with_info_exposes_header() {
    let (device, _) = common::mock_device(vec![
        fixtures::ack_bytes(),
        fixtures::info_two_packets(),
        fixtures::block_160_120(),
        fixtures::arrow_0_10(),
    ]);
    let mut device = device.set_mode(Algorithm::ObjectRecognition).unwrap();
    let (info, detections) = device.poll_with_info().unwrap();
    assert_eq!(info.packet_count, 2);
    assert_eq!(info.id_count, 3);
    assert_eq!(info.frame_number, 7);
    assert_eq!(detections.len(), 2);
}

#[test]
fn line_tracking_arrows() {
    let (device, _) = common::mock_device(vec![
        fixtures::ack_bytes(),
        info_frame(1),
        arrow_frame(160, 0, 150, 239),
    ]);
    let mut device = device.set_mode(Algorithm::LineTracking).unwrap();
    let detections = device.poll_arrows().unwrap();
    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].kind, DetectionKind::Arrow);
    assert_eq!(detections[0].start, Point::new(160, 0));
}

#[test]
fn filtered_polls_use_their_commands() {
    let (device, shared) = common::mock_device(vec![
        fixtures::ack_bytes(),
        info_frame(0),
        info_frame(0),
        info_frame(1),
        block_frame(1, 2, 3, 4),
        info_frame(0),
    ]);
    let mut device = device.set_mode(Algorithm::ObjectClassification).unwrap();
    assert!(device.poll_blocks().unwrap().is_empty());
    assert!(device.poll_learned().unwrap().is_empty());
    assert_eq!(device.poll_by_id(ObjectId::new(3)).unwrap().len(), 1);
    let (info, _) = device
        .poll_request(Request::ArrowsById(ObjectId::new(3)))
        .unwrap();
    assert_eq!(info.packet_count, 0);

    let commands: Vec<u8> = shared.mock().sent.iter().map(|f| f[4]).collect();
    assert_eq!(commands, vec![0x2D, 0x21, 0x23, 0x26, 0x28]);
}

#[test]
fn empty_scene_is_not_an_error() {
    let (device, _) = common::mock_device(vec![fixtures::ack_bytes(), info_frame(0)]);
    let mut device = device.set_mode(Algorithm::FaceRecognition).unwrap();
    assert!(device.poll().unwrap().is_empty());
}
