use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::catalog::{CatalogClient, SupplierRecord};
use crate::config::CatalogConfig;

/// HTTP client for the part-search backend.
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> color_eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    async fn search(
        &self,
        supplier: &str,
        part_number: &str,
    ) -> color_eyre::Result<Option<SupplierRecord>> {
        let url = format!("{}/api/search", self.base_url);
        debug!(supplier, part_number, "querying part-search backend");

        let response = self
            .client
            .get(&url)
            .query(&[("supplier", supplier), ("part_number", part_number)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: serde_json::Value = response.error_for_status()?.json().await?;
        Ok(SupplierRecord::from_value(body))
    }
}
