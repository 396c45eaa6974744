//! Primary-then-fallback source composition.

use std::future::Future;

use serde_json::Value;
use tracing::warn;

use super::{DataSource, TableFilter};

/// Reads from `primary`, falling back to `fallback` when it fails.
#[derive(Debug, Clone)]
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: DataSource, F: DataSource> DataSource for FallbackSource<P, F> {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn fetch(
        &self,
        table: &str,
        filter: &TableFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<Value>>> + Send {
        async move {
            match self.primary.fetch(table, filter).await {
                Ok(rows) => Ok(rows),
                Err(err) => {
                    warn!(
                        table,
                        primary = self.primary.name(),
                        fallback = self.fallback.name(),
                        error = %format!("{err:#}"),
                        "primary source failed, using fallback"
                    );
                    self.fallback.fetch(table, filter).await
                }
            }
        }
    }
}
