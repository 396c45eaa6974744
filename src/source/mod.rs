//! Data Source Module
//!
//! Opaque asynchronous producers of table rows. The cache never looks inside
//! them; the directory service hands their futures to `get_or_load`.

mod fallback;
mod filter;
mod remote;
mod static_data;

use std::future::Future;

use serde_json::Value;

pub use fallback::FallbackSource;
pub use filter::TableFilter;
pub use remote::RemoteSource;
pub use static_data::StaticSource;

/// Table holding clinic rows
pub const CLINICS_TABLE: &str = "clinics";

/// Table holding review rows
pub const REVIEWS_TABLE: &str = "reviews";

// == Data Source ==
/// Reads rows of a named table matching an equality filter.
pub trait DataSource: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetches every row of `table` matching `filter`.
    fn fetch(
        &self,
        table: &str,
        filter: &TableFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<Value>>> + Send;
}
