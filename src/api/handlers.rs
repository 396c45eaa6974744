//! API Handlers
//!
//! HTTP request handlers for directory reads and cache diagnostics.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::ReadThroughCache;
use crate::config::Config;
use crate::directory::{DirectoryService, TtlPolicy};
use crate::error::{CacheError, Result};
use crate::models::{
    CacheValueResponse, Clinic, HealthResponse, InvalidateResponse, Review, StatsResponse,
};
use crate::source::{DataSource, TableFilter};

/// Application state shared across all handlers.
pub struct AppState<S> {
    /// Directory reads, backed by the shared cache
    pub directory: DirectoryService<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
        }
    }
}

impl<S: DataSource> AppState<S> {
    /// Creates a new AppState around an existing cache.
    pub fn new(source: S, cache: ReadThroughCache, ttl: TtlPolicy) -> Self {
        Self {
            directory: DirectoryService::new(source, cache, ttl),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(source: S, config: &Config) -> Self {
        let cache = ReadThroughCache::new(config.default_ttl);
        Self::new(source, cache, config.ttl_policy())
    }

    /// The shared cache.
    pub fn cache(&self) -> &ReadThroughCache {
        self.directory.cache()
    }
}

// == Directory ==

/// Handler for GET /clinics
pub async fn list_clinics_handler<S: DataSource>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Clinic>>> {
    Ok(Json(state.directory.all_clinics().await?))
}

/// Handler for GET /clinics/:id
pub async fn get_clinic_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Clinic>> {
    state
        .directory
        .clinic(&id)
        .await?
        .map(Json)
        .ok_or_else(|| CacheError::NotFound(format!("clinic {}", id)))
}

/// Handler for GET /clinics/:id/reviews
pub async fn clinic_reviews_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>> {
    Ok(Json(state.directory.reviews(&id).await?))
}

/// Handler for GET /search
///
/// Every query parameter becomes an equality constraint.
pub async fn search_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Clinic>>> {
    let filter = TableFilter::from(params);
    Ok(Json(state.directory.search(filter).await?))
}

/// Handler for POST /clinics/:id/invalidate
pub async fn invalidate_clinic_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    state.directory.invalidate_clinic(&id).await?;
    Ok(Json(InvalidateResponse::clinic(&id)))
}

// == Cache Diagnostics ==

/// Handler for GET /cache/:key
pub async fn peek_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<CacheValueResponse>> {
    match state.cache().peek(&key).await? {
        Some((value, ttl_remaining)) => {
            Ok(Json(CacheValueResponse::new(key, value, ttl_remaining)))
        }
        None => Err(CacheError::NotFound(format!("cache key {}", key))),
    }
}

/// Handler for DELETE /cache/:key
pub async fn invalidate_key_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    state.cache().invalidate(&key).await?;
    Ok(Json(InvalidateResponse::key(&key)))
}

/// Handler for DELETE /cache
pub async fn clear_handler<S: DataSource>(
    State(state): State<AppState<S>>,
) -> Json<InvalidateResponse> {
    state.cache().clear().await;
    Json(InvalidateResponse::cleared())
}

/// Handler for GET /stats
pub async fn stats_handler<S: DataSource>(State(state): State<AppState<S>>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache().stats().await))
}

/// Handler for GET /health
pub async fn health_handler<S: DataSource>(
    State(state): State<AppState<S>>,
) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.directory.source_name()))
}
