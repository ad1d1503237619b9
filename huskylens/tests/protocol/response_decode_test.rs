#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use huskylens::protocol::{ReadOptions, Response, read_response};
use huskylens::transport::MockTransport;
use huskylens::{Detection, DetectionKind, InfoHeader, ObjectId, Point};

#[test]
fn two_packet_response_leaves_third_frame_unread() {
    let mut m = MockTransport::new();
    common::seed_frames(
        &mut m,
        vec![
            fixtures::info_two_packets(),
            fixtures::block_160_120(),
            fixtures::arrow_0_10(),
            fixtures::block_160_120(),
        ],
    );

    match read_response(&mut m, ReadOptions::default()).unwrap() {
        Response::Detections { info, detections } => {
            assert_eq!(
                info,
                InfoHeader {
                    packet_count: 2,
                    id_count: 3,
                    frame_number: 7,
                }
            );
            assert_eq!(
                detections,
                vec![
                    Detection::block(Point::new(160, 120), Point::new(20, 30), ObjectId::new(1)),
                    Detection::arrow(Point::new(0, 10), Point::new(300, 200), ObjectId::UNLEARNED),
                ]
            );
        }
        other => panic!("unexpected response: {:?}", other),
    }
    assert_eq!(m.remaining(), 16);
}

#[test]
fn detection_display() {
    let mut m = MockTransport::new();
    common::seed_frames(
        &mut m,
        vec![
            fixtures::info_two_packets(),
            fixtures::block_160_120(),
            fixtures::arrow_0_10(),
        ],
    );
    let Response::Detections { detections, .. } =
        read_response(&mut m, ReadOptions::default()).unwrap()
    else {
        panic!("expected detections");
    };
    assert_eq!(detections[0].kind, DetectionKind::Block);
    assert_eq!(
        detections[0].to_string(),
        "block center=(160, 120) size=20x30 id=1"
    );
    assert_eq!(
        detections[1].to_string(),
        "arrow (0, 10) -> (300, 200) id=0"
    );
}

#[test]
fn ack_response_passes_through() {
    let mut m = MockTransport::new();
    m.push_response(fixtures::ack_bytes());
    let resp = read_response(&mut m, ReadOptions::default()).unwrap();
    assert!(matches!(resp, Response::Ack(_)));
    assert_eq!(m.reads, vec![5, 1]);
}
