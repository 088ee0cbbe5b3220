//! REST client for the block explorer data service.
//!
//! Records are served as plain JSON bodies:
//!
//! ```text
//! GET {base_url}/block/{block_hash}       -> Block
//! GET {base_url}/transaction/{txn_hash}   -> Transaction
//! ```

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use super::DataService;
use super::http::{HttpClient, HttpConfig};
use crate::domain::{Block, EntityKind, ExplorerError, Transaction};

// ============================================================================
// Explorer Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: HttpClient,
    base_url: Url,
}

impl ExplorerClient {
    /// Creates a client for the data service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, ExplorerError> {
        let raw = base_url.into();
        let base_url = Url::parse(&raw)
            .map_err(|e| ExplorerError::invalid_input(format!("invalid API URL '{raw}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ExplorerError::invalid_input(format!(
                "API URL '{raw}' cannot take a path"
            )));
        }

        Ok(Self {
            http: HttpClient::with_config(config)?,
            base_url,
        })
    }

    /// `{base_url}/{kind}/{id}` with `id` percent-encoded as one path segment.
    fn endpoint(&self, kind: EntityKind, id: &str) -> Result<Url, ExplorerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ExplorerError::invalid_input(format!(
                    "API URL '{}' cannot take a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend([kind.as_str(), id]);
        Ok(url)
    }

    async fn get_record<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<T, ExplorerError> {
        if id.trim().is_empty() {
            return Err(ExplorerError::invalid_input(format!(
                "{} identifier cannot be empty",
                kind.as_str()
            )));
        }

        let url = self.endpoint(kind, id)?;
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .inspect_err(|e| tracing::debug!("{} {id} fetch failed: {e}", kind.as_str()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ExplorerError::not_found(kind.as_str(), id));
        }
        if !status.is_success() {
            tracing::debug!("{} {id} HTTP error: {status}", kind.as_str());
            return Err(ExplorerError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("{} {id} JSON parse error: {e}", kind.as_str());
            ExplorerError::parse(format!("invalid {} payload: {e}", kind.as_str()))
        })
    }
}

impl DataService for ExplorerClient {
    async fn fetch_block(&self, block_id: &str) -> Result<Block, ExplorerError> {
        self.get_record(EntityKind::Block, block_id).await
    }

    async fn fetch_transaction(&self, txn_id: &str) -> Result<Transaction, ExplorerError> {
        self.get_record(EntityKind::Transaction, txn_id).await
    }
}

// ============================================================================
// Tests
// ============================================================================
