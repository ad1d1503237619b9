//! Utilities for huskylens: small, reusable helpers used across the crate.
//!
//! Hex formatting for frame dumps and timeout handling for transports.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
