//! Bundled fallback dataset.

use std::collections::HashMap;
use std::future::Future;

use anyhow::Context;
use serde_json::Value;

use super::{DataSource, TableFilter};

const FALLBACK_DATASET: &str = include_str!("../../data/fallback.json");

// == Static Source ==
/// In-memory tables, used when no backend is configured or it is unreachable.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    tables: HashMap<String, Vec<Value>>,
}

impl StaticSource {
    /// Loads the dataset compiled into the binary.
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_json(FALLBACK_DATASET).context("parsing bundled fallback dataset")
    }

    /// Parses a JSON object of `table name → array of rows`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tables: HashMap<String, Vec<Value>> = serde_json::from_str(json)?;
        Ok(Self { tables })
    }

    /// Builds a source from rows already in memory.
    pub fn with_table(mut self, table: impl Into<String>, rows: Vec<Value>) -> Self {
        self.tables.insert(table.into(), rows);
        self
    }

    fn rows(&self, table: &str, filter: &TableFilter) -> Vec<Value> {
        self.tables
            .get(table)
            .map(|rows| rows.iter().filter(|row| filter.matches(row)).cloned().collect())
            .unwrap_or_default()
    }
}

impl DataSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    fn fetch(
        &self,
        table: &str,
        filter: &TableFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<Value>>> + Send {
        let rows = self.rows(table, filter);
        async move { Ok(rows) }
    }
}
