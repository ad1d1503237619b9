// Shared helpers for integration tests. Each top-level test crate pulls
// this in with `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]


use huskylens::device::{Connected, Device};
use huskylens::test_support::SharedTransport;
use huskylens::transport::MockTransport;

/// Queue `frames` on a fresh mock, in order.
pub fn seed_frames(m: &mut MockTransport, frames: Vec<Vec<u8>>) {
    for f in frames {
        m.push_response(f);
    }
}

/// A strict, zero-delay Device over a shared mock seeded with `frames`.
pub fn mock_device(frames: Vec<Vec<u8>>) -> (Device<Connected>, SharedTransport) {
    let shared = SharedTransport::new(MockTransport::new());
    seed_frames(&mut shared.mock(), frames);
    let device = Device::new_with_transport(Box::new(shared.clone()));
    (device, shared)
}
