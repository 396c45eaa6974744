//! Domain records and HTTP DTOs
//!
//! Loosely-typed backend rows, the display-ready values mapped from them, and
//! the bodies returned by the diagnostics API.

pub mod clinic;
mod lenient;
pub mod responses;
pub mod review;

// Re-export commonly used types
pub use clinic::{Clinic, ClinicRecord};
pub use responses::{
    CacheValueResponse, ErrorResponse, HealthResponse, InvalidateResponse, StatsResponse,
};
pub use review::{Review, ReviewRecord};
