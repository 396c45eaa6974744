//! API Module
//!
//! HTTP handlers and routing for the directory and cache diagnostics API.
//!
//! # Endpoints
//! - `GET /clinics`, `GET /clinics/:id`, `GET /clinics/:id/reviews`
//! - `GET /search` - Clinics matching query parameters
//! - `POST /clinics/:id/invalidate` - Drop cached views of a clinic
//! - `GET /cache/:key`, `DELETE /cache/:key`, `DELETE /cache`
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
