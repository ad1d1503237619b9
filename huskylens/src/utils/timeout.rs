//! Timeout helpers used across the crate.
//!
//! They centralize the default read timeout and provide the `Deadline`
//! type used by transports that assemble a read out of several partial
//! reads.

use std::time::{Duration, Instant};

/// Default read timeout in milliseconds used by the serial transport when
/// the configuration doesn't provide one.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Fixed point in time after which a multi-part read gives up.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `timeout` from now
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    /// True once the deadline has passed
    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Time left, zero once expired
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }
}
