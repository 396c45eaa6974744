//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::directory::TtlPolicy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL for cache writes that do not specify one
    pub default_ttl: Duration,
    /// TTL for clinic directory data
    pub directory_ttl: Duration,
    /// TTL for reviews
    pub reviews_ttl: Duration,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between expired-entry purges, 0 disables purging
    pub purge_interval: u64,
    /// Hosted backend base URL; the bundled dataset is used when unset
    pub backend_url: Option<String>,
    /// API key sent to the hosted backend
    pub backend_api_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `DIRECTORY_TTL_MS` - Clinic data TTL in milliseconds (default: 600000)
    /// - `REVIEWS_TTL_MS` - Review TTL in milliseconds (default: 120000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PURGE_INTERVAL` - Purge frequency in seconds (default: 60)
    /// - `BACKEND_URL` - Hosted backend base URL (default: unset)
    /// - `BACKEND_API_KEY` - Hosted backend API key (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: env_millis("DEFAULT_TTL_MS").unwrap_or(defaults.default_ttl),
            directory_ttl: env_millis("DIRECTORY_TTL_MS").unwrap_or(defaults.directory_ttl),
            reviews_ttl: env_millis("REVIEWS_TTL_MS").unwrap_or(defaults.reviews_ttl),
            server_port: env_parse("SERVER_PORT").unwrap_or(defaults.server_port),
            purge_interval: env_parse("PURGE_INTERVAL").unwrap_or(defaults.purge_interval),
            backend_url: env_string("BACKEND_URL"),
            backend_api_key: env_string("BACKEND_API_KEY"),
        }
    }

    /// Per-resource TTLs for the directory service.
    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy {
            directory: self.directory_ttl,
            reviews: self.reviews_ttl,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let ttl = TtlPolicy::default();
        Self {
            default_ttl: crate::cache::DEFAULT_TTL,
            directory_ttl: ttl.directory,
            reviews_ttl: ttl.reviews,
            server_port: 3000,
            purge_interval: 60,
            backend_url: None,
            backend_api_key: None,
        }
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Zero is treated as unset since a zero TTL is never valid.
fn env_millis(name: &str) -> Option<Duration> {
    env_parse::<u64>(name)
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
