//! Cache Module
//!
//! Provides an in-memory read-through cache with per-entry TTL and
//! de-duplication of concurrent loads for the same key.

mod entry;
mod inflight;
mod stats;
mod store;


use std::time::Duration;

use crate::error::{CacheError, Result};

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ReadThroughCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 1024;

/// TTL applied when a caller does not supply one
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

// == Validation ==
/// Rejects empty and oversized keys.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}
