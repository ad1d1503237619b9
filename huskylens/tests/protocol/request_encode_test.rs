#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use huskylens::protocol::codec::{encode_request, send_request};
use huskylens::protocol::{Command, Frame, Request};
use huskylens::transport::MockTransport;
use huskylens::{Algorithm, ObjectId};

#[test]
fn knock_and_request_frames() {
    assert_eq!(
        encode_request(&Request::Knock).unwrap(),
        fixtures::knock_bytes()
    );
    assert_eq!(
        encode_request(&Request::Detections).unwrap(),
        fixtures::request_bytes()
    );
}

#[test]
fn every_algorithm_selector() {
    for alg in Algorithm::ALL {
        let raw = encode_request(&Request::SetAlgorithm(alg)).unwrap();
        let frame = Frame::decode(&raw).unwrap();
        assert_eq!(frame.command(), Command::RequestAlgorithm);
        assert_eq!(frame.payload(), &[alg.code() as u8, 0x00]);
    }
}

#[test]
fn by_id_variants_carry_le_id() {
    let id = ObjectId::new(0x0102);
    for (req, cmd) in [
        (Request::ById(id), Command::RequestById),
        (Request::BlocksById(id), Command::RequestBlocksById),
        (Request::ArrowsById(id), Command::RequestArrowsById),
    ] {
        let frame = Frame::decode(&encode_request(&req).unwrap()).unwrap();
        assert_eq!(frame.command(), cmd);
        assert_eq!(frame.payload(), &[0x02, 0x01]);
    }
}

#[test]
fn send_request_is_a_single_write() {
    let mut m = MockTransport::new();
    send_request(&mut m, &Request::SetAlgorithm(Algorithm::LineTracking)).unwrap();
    assert_eq!(m.sent, vec![fixtures::set_line_tracking_bytes()]);
}
