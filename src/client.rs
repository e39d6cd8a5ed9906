use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;

use crate::config::Config;
use crate::error::{CheckError, Result};

// Create a static client to reuse connections across checker instances.
// It pools connections only; no response data is shared.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// One page of a `list` endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub items: Vec<Value>,
    pub raw: Value,
}

/// Catalog rows returned for the table models.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCatalog {
    pub rows: Vec<Value>,
}

/// Thin client for the BPS WebAPI `list` endpoint family.
#[derive(Debug, Clone)]
pub struct BpsClient {
    api_key: String,
    domain: String,
    base_url: String,
}

impl BpsClient {
    pub fn new(
        api_key: impl Into<String>,
        domain: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        BpsClient {
            api_key: api_key.into(),
            domain: domain.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.domain.clone(),
            config.base_url.clone(),
        )
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    fn list_url(&self, model: &str) -> String {
        format!(
            "{}/list/model/{}/domain/{}/key/{}",
            self.base_url, model, self.domain, self.api_key
        )
    }

    /// Fetches one page of the given list model and parses the envelope.
    pub async fn list(&self, model: &str) -> Result<ListPage> {
        let response = CLIENT.get(self.list_url(model)).send().await?;
        let response = response.error_for_status()?;
        let raw: Value = response.json().await?;

        let items = extract_items(&raw)?;
        Ok(ListPage { items, raw })
    }

    /// Dedicated call for the static/dynamic table catalogs. Same endpoint
    /// family, but only the rows are kept.
    pub async fn table_catalog(&self, model: &str) -> Result<TableCatalog> {
        let page = self.list(model).await?;
        Ok(TableCatalog { rows: page.items })
    }
}

/// The BPS list envelope keeps its payload at `data[1]`; `data[0]` is paging
/// metadata. A `data` array without the payload slot is an empty page.
pub fn extract_items(raw: &Value) -> Result<Vec<Value>> {
    let data = raw
        .get("data")
        .ok_or_else(|| CheckError::Shape("response has no 'data' member".to_string()))?;

    let entries = data
        .as_array()
        .ok_or_else(|| CheckError::Shape("'data' is not an array".to_string()))?;

    if entries.len() <= 1 {
        return Ok(Vec::new());
    }

    let items = entries[1]
        .as_array()
        .ok_or_else(|| CheckError::Shape("'data[1]' is not an array".to_string()))?;

    Ok(items.clone())
}
