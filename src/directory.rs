//! Directory Service
//!
//! Reads clinics and reviews through the shared [`ReadThroughCache`].
//!
//! Cache keys are namespaced by prefix:
//! - `all-clinics` - the whole directory
//! - `clinic-<id>` - one clinic
//! - `search-<filter JSON>` - a filtered clinic list
//! - `reviews-<clinic id>` - reviews of one clinic
//!
//! Rows are cached as raw JSON and mapped to typed values on the way out, so
//! a row that fails to map never poisons the cache.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::cache::ReadThroughCache;
use crate::error::Result;
use crate::models::{Clinic, ClinicRecord, Review, ReviewRecord};
use crate::source::{DataSource, TableFilter, CLINICS_TABLE, REVIEWS_TABLE};

/// Key of the full clinic list
pub const ALL_CLINICS_KEY: &str = "all-clinics";

pub fn clinic_key(id: &str) -> String {
    format!("clinic-{id}")
}

pub fn search_key(filter: &TableFilter) -> String {
    format!("search-{}", filter.to_key_fragment())
}

pub fn reviews_key(clinic_id: &str) -> String {
    format!("reviews-{clinic_id}")
}

// == TTL Policy ==
/// How long each kind of resource stays cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TtlPolicy {
    /// Clinic directory data, comparatively static
    pub directory: Duration,
    /// Reviews, which change more often
    pub reviews: Duration,
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            directory: Duration::from_secs(10 * 60),
            reviews: Duration::from_secs(2 * 60),
        }
    }
}

// == Directory Service ==
pub struct DirectoryService<S> {
    source: Arc<S>,
    cache: ReadThroughCache,
    ttl: TtlPolicy,
}

impl<S> Clone for DirectoryService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: self.cache.clone(),
            ttl: self.ttl,
        }
    }
}

impl<S: DataSource> DirectoryService<S> {
    pub fn new(source: S, cache: ReadThroughCache, ttl: TtlPolicy) -> Self {
        Self {
            source: Arc::new(source),
            cache,
            ttl,
        }
    }

    /// The cache this service reads through.
    pub fn cache(&self) -> &ReadThroughCache {
        &self.cache
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetches `table` rows through the cache under `key`.
    async fn rows(
        &self,
        key: &str,
        table: &'static str,
        filter: TableFilter,
        ttl: Duration,
    ) -> Result<Vec<Value>> {
        let source = Arc::clone(&self.source);
        let value = self
            .cache
            .get_or_load(
                key,
                move || async move {
                    let rows = source.fetch(table, &filter).await?;
                    Ok(Value::Array(rows))
                },
                Some(ttl),
            )
            .await?;

        Ok(match value {
            Value::Array(rows) => rows,
            _ => Vec::new(),
        })
    }

    // == Clinics ==
    /// Every clinic in the directory.
    pub async fn all_clinics(&self) -> Result<Vec<Clinic>> {
        let rows = self
            .rows(ALL_CLINICS_KEY, CLINICS_TABLE, TableFilter::new(), self.ttl.directory)
            .await?;
        Ok(to_clinics(rows))
    }

    /// One clinic by id, or `None` if the backend has no such row.
    pub async fn clinic(&self, id: &str) -> Result<Option<Clinic>> {
        let rows = self
            .rows(
                &clinic_key(id),
                CLINICS_TABLE,
                TableFilter::new().equals("id", id),
                self.ttl.directory,
            )
            .await?;
        Ok(to_clinics(rows).into_iter().next())
    }

    /// Clinics matching every column constraint in `filter`.
    pub async fn search(&self, filter: TableFilter) -> Result<Vec<Clinic>> {
        if filter.is_empty() {
            return self.all_clinics().await;
        }
        let key = search_key(&filter);
        let rows = self
            .rows(&key, CLINICS_TABLE, filter, self.ttl.directory)
            .await?;
        Ok(to_clinics(rows))
    }

    // == Reviews ==
    /// Reviews of one clinic, newest first.
    pub async fn reviews(&self, clinic_id: &str) -> Result<Vec<Review>> {
        let rows = self
            .rows(
                &reviews_key(clinic_id),
                REVIEWS_TABLE,
                TableFilter::new().equals("clinic_id", clinic_id),
                self.ttl.reviews,
            )
            .await?;

        let mut reviews = map_rows(rows, "review", ReviewRecord::into_review);
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    // == Invalidation ==
    /// Drops every cached view of a clinic after it was changed upstream.
    ///
    /// Search results are left to expire on their own since any of them may
    /// or may not include the clinic.
    pub async fn invalidate_clinic(&self, id: &str) -> Result<()> {
        self.cache.invalidate(&clinic_key(id)).await?;
        self.cache.invalidate(ALL_CLINICS_KEY).await?;
        self.cache.invalidate(&reviews_key(id)).await?;
        info!(clinic_id = id, "invalidated cached clinic");
        Ok(())
    }
}

fn to_clinics(rows: Vec<Value>) -> Vec<Clinic> {
    map_rows(rows, "clinic", ClinicRecord::into_clinic)
}

/// Maps raw rows to typed values, logging each row that cannot be used.
fn map_rows<R, T>(rows: Vec<Value>, kind: &'static str, convert: fn(R) -> Option<T>) -> Vec<T>
where
    R: DeserializeOwned,
{
    rows.iter()
        .filter_map(|row| {
            let mapped = R::deserialize(row).ok().and_then(convert);
            if mapped.is_none() {
                warn!(kind, row = %row, "dropping row without a usable id");
            }
            mapped
        })
        .collect()
}
