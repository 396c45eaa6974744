//! Hosted backend client.
//!
//! Speaks the PostgREST dialect: `GET {base}/rest/v1/{table}?select=*&col=eq.value`.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{DataSource, TableFilter};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// == Remote Source ==
/// Reads tables from the hosted backend over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl RemoteSource {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: &str, api_key: Option<String>) -> anyhow::Result<Self> {
        // Url::join replaces the last path segment unless the base ends in '/'
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).with_context(|| format!("invalid backend URL {base_url}"))?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Builds the request URL for a table read.
    pub fn table_url(&self, table: &str, filter: &TableFilter) -> anyhow::Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("rest/v1/{table}"))
            .with_context(|| format!("invalid table name {table}"))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            for (column, value) in filter.iter() {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                query.append_pair(column, &format!("eq.{value}"));
            }
        }
        Ok(url)
    }
}

impl DataSource for RemoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn fetch(
        &self,
        table: &str,
        filter: &TableFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<Value>>> + Send {
        let url = self.table_url(table, filter);
        let client = self.client.clone();
        let api_key = self.api_key.clone();
        let table = table.to_string();

        async move {
            let url = url?;
            debug!(%url, "fetching from backend");

            let mut request = client.get(url).header("accept", "application/json");
            if let Some(key) = api_key {
                request = request.header("apikey", &key).bearer_auth(key);
            }

            let rows = request
                .send()
                .await
                .with_context(|| format!("requesting table {table}"))?
                .error_for_status()
                .with_context(|| format!("backend rejected read of table {table}"))?
                .json::<Vec<Value>>()
                .await
                .with_context(|| format!("decoding rows of table {table}"))?;
            Ok(rows)
        }
    }
}
