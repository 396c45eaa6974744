//! Error types for the clinic cache
//!
//! Provides unified error handling using thiserror.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and the data layer built on it.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// Key is empty or exceeds the maximum length
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// TTL of zero was supplied
    #[error("Invalid TTL: must be greater than zero")]
    InvalidTtl,

    /// Producer failed; shared verbatim by every caller joined on the load
    #[error("Load failed: {0:#}")]
    Load(Arc<anyhow::Error>),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CacheError {
    /// Returns the shared producer error, if this is a load failure.
    pub fn load_error(&self) -> Option<&Arc<anyhow::Error>> {
        match self {
            CacheError::Load(err) => Some(err),
            _ => None,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidKey(_) | CacheError::InvalidTtl => StatusCode::BAD_REQUEST,
            CacheError::Load(_) => StatusCode::BAD_GATEWAY,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
