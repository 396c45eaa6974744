//! API Routes
//!
//! Configures the Axum router with the directory and diagnostics endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, clinic_reviews_handler, get_clinic_handler, health_handler,
    invalidate_clinic_handler, invalidate_key_handler, list_clinics_handler, peek_handler,
    search_handler, stats_handler, AppState,
};
use crate::source::DataSource;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /clinics` - All clinics
/// - `GET /clinics/:id` - One clinic
/// - `GET /clinics/:id/reviews` - Reviews of a clinic
/// - `POST /clinics/:id/invalidate` - Drop cached views of a clinic
/// - `GET /search` - Clinics matching query parameters
/// - `GET /cache/:key` - Peek at a cached value
/// - `DELETE /cache/:key` - Invalidate one key
/// - `DELETE /cache` - Clear the cache
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router<S: DataSource>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/clinics", get(list_clinics_handler::<S>))
        .route("/clinics/:id", get(get_clinic_handler::<S>))
        .route("/clinics/:id/reviews", get(clinic_reviews_handler::<S>))
        .route("/clinics/:id/invalidate", post(invalidate_clinic_handler::<S>))
        .route("/search", get(search_handler::<S>))
        .route(
            "/cache/:key",
            get(peek_handler::<S>).delete(invalidate_key_handler::<S>),
        )
        .route("/cache", delete(clear_handler::<S>))
        .route("/stats", get(stats_handler::<S>))
        .route("/health", get(health_handler::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
