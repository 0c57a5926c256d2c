use crate::core::store::client::{SelectFilter, StoreClient};
use crate::domain::config::StoreConfig;
use crate::domain::error::{FloodWatchError, FloodWatchResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Store client speaking the PostgREST-style HTTP API the backend exposes
pub struct RestStoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestStoreClient {
    pub fn new(config: &StoreConfig) -> FloodWatchResult<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| FloodWatchError::Config {
                message: "Store base URL is not configured".to_string(),
            })?
            .trim_end_matches('/')
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl StoreClient for RestStoreClient {
    async fn select(
        &self,
        collection: &str,
        filter: Option<SelectFilter>,
        limit: Option<usize>,
    ) -> FloodWatchResult<Vec<serde_json::Value>> {
        let mut query: Vec<(String, String)> = vec![
            ("select".to_string(), "*".to_string()),
            ("order".to_string(), "created_at.desc".to_string()),
        ];
        if let Some(f) = filter {
            query.push((f.column, format!("eq.{}", f.value)));
        }
        if let Some(n) = limit {
            query.push(("limit".to_string(), n.to_string()));
        }

        debug!("GET {} with {} query params", collection, query.len());

        let response = self
            .authorize(self.http.get(self.collection_url(collection)))
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn insert(
        &self,
        collection: &str,
        record: serde_json::Value,
    ) -> FloodWatchResult<serde_json::Value> {
        let response = self
            .authorize(self.http.post(self.collection_url(collection)))
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await?
            .error_for_status()?;

        // The API returns the inserted rows as an array
        let mut rows: Vec<serde_json::Value> = response.json().await?;
        rows.pop().ok_or_else(|| FloodWatchError::Store {
            message: format!("Insert into '{}' returned no rows", collection),
        })
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: serde_json::Value,
    ) -> FloodWatchResult<serde_json::Value> {
        let response = self
            .authorize(self.http.patch(self.collection_url(collection)))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?
            .error_for_status()?;

        let mut rows: Vec<serde_json::Value> = response.json().await?;
        rows.pop().ok_or_else(|| FloodWatchError::Store {
            message: format!("No row with id '{}' in '{}'", id, collection),
        })
    }
}
