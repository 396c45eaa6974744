//! Response DTOs for the diagnostics API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for a cache peek (GET /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct CacheValueResponse {
    /// The requested key
    pub key: String,
    /// The cached value
    pub value: Value,
    /// Milliseconds until the entry expires
    pub ttl_remaining_ms: u64,
}

impl CacheValueResponse {
    pub fn new(key: impl Into<String>, value: Value, ttl_remaining: Duration) -> Self {
        Self {
            key: key.into(),
            value,
            ttl_remaining_ms: u64::try_from(ttl_remaining.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Response body for invalidation endpoints
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
}

impl InvalidateResponse {
    /// A single key was invalidated
    pub fn key(key: &str) -> Self {
        Self {
            message: format!("Key '{}' invalidated", key),
        }
    }

    /// Every cached view of a clinic was invalidated
    pub fn clinic(id: &str) -> Self {
        Self {
            message: format!("Clinic '{}' invalidated", id),
        }
    }

    /// The whole cache was cleared
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self { stats, hit_rate }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Data source the directory reads from
    pub source: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(source: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            source: source.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
