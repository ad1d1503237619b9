// huskylens/src/protocol/mod.rs

//! HuskyLens frame protocol: codec, requests, responses and the reader.

pub mod checksum;
pub mod codec;
pub mod command;
pub mod frame;
pub mod parser;
pub mod reader;
pub mod requests;
pub mod responses;

pub use checksum::checksum;
pub use command::Command;
pub use frame::Frame;
pub use reader::{ReadOptions, read_frame, read_frame_with, read_next_frame, read_response};
pub use requests::Request;
pub use responses::Response;
