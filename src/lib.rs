//! Clinic Cache - read-through caching for a clinic comparison site
//!
//! Provides a TTL read-through cache that coalesces concurrent loads, the
//! data sources and directory service that read through it, and a small
//! diagnostics HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod source;
pub mod tasks;

pub use api::AppState;
pub use cache::ReadThroughCache;
pub use config::Config;
pub use directory::{DirectoryService, TtlPolicy};
pub use error::{CacheError, Result};
pub use tasks::spawn_purge_task;
