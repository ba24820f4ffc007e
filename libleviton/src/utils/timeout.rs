//! Timeout helpers used across the crate.

use std::time::Duration;

/// Default timeout in milliseconds for every USB read and write.
pub const DEFAULT_IO_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
