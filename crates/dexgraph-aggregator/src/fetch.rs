//! The remote fetch capability.
//!
//! The aggregator only needs `get(url) -> JSON document`. [`Fetcher`] is that
//! seam; [`HttpFetcher`] implements it over `reqwest`, and [`MemoryFetcher`]
//! serves canned documents for hosts and tests that do not want a network.
//! Retries and backoff, if wanted, belong in a `Fetcher` implementation.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::AggregatorConfig;
use crate::error::TransportError;

/// Something that can fetch a JSON document by URL.
///
/// Any failure (network error, non-success status, unreadable body) is a
/// [`TransportError`].
pub trait Fetcher: Send + Sync {
    /// Fetch the document at `url`.
    fn get(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

impl<F: Fetcher> Fetcher for Arc<F> {
    fn get(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send {
        (**self).get(url)
    }
}

impl<F: Fetcher> Fetcher for &F {
    fn get(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send {
        (**self).get(url)
    }
}

/// Fetch a document and decode it into `T`.
///
/// # Errors
///
/// Returns the fetcher's [`TransportError`], or [`TransportError::Decode`]
/// if the document does not match `T`.
pub async fn fetch_document<T, F>(fetcher: &F, url: &str) -> Result<T, TransportError>
where
    T: DeserializeOwned,
    F: Fetcher,
{
    let value = fetcher.get(url).await?;
    serde_json::from_value(value).map_err(|source| TransportError::Decode {
        url: url.to_owned(),
        source,
    })
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// [`Fetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new(config: &AggregatorConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| TransportError::Request {
                url: config.api_base_url.clone(),
                source,
            })?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        debug!(url = url, "fetching document");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_owned(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| TransportError::Decode {
            url: url.to_owned(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// [`Fetcher`] serving documents from memory, keyed by exact URL.
///
/// Unknown URLs answer with status 404; URLs registered with
/// [`MemoryFetcher::fail`] answer with the given status.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    documents: BTreeMap<String, Value>,
    failures: BTreeMap<String, u16>,
}

impl MemoryFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` at `url`.
    #[must_use]
    pub fn with(mut self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }

    /// Serve `document` at `url`.
    pub fn insert(&mut self, url: impl Into<String>, document: Value) {
        self.documents.insert(url.into(), document);
    }

    /// Make `url` fail with `status`.
    #[must_use]
    pub fn fail(mut self, url: impl Into<String>, status: u16) -> Self {
        self.failures.insert(url.into(), status);
        self
    }
}

impl Fetcher for MemoryFetcher {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        if let Some(&status) = self.failures.get(url) {
            return Err(TransportError::Status {
                url: url.to_owned(),
                status,
            });
        }
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                url: url.to_owned(),
                status: 404,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn memory_fetcher_serves_registered_documents() {
        let fetcher =
            MemoryFetcher::new().with("http://h/a", serde_json::json!({"name": "alpha"}));
        let doc: Named = fetch_document(&fetcher, "http://h/a").await.unwrap();
        assert_eq!(doc.name, "alpha");
    }

    #[tokio::test]
    async fn memory_fetcher_unknown_url_is_404() {
        let err = MemoryFetcher::new().get("http://h/missing").await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
        assert_eq!(err.url(), "http://h/missing");
    }

    #[tokio::test]
    async fn failure_takes_precedence_over_document() {
        let fetcher = MemoryFetcher::new()
            .with("http://h/a", serde_json::json!({}))
            .fail("http://h/a", 503);
        let err = fetcher.get("http://h/a").await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn shape_mismatch_is_decode_error() {
        let fetcher = MemoryFetcher::new().with("http://h/a", serde_json::json!([1, 2, 3]));
        let err = fetch_document::<Named, _>(&fetcher, "http://h/a")
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode { .. }));
    }

    #[tokio::test]
    async fn shared_fetcher_delegates() {
        let fetcher =
            Arc::new(MemoryFetcher::new().with("http://h/a", serde_json::json!({"name": "b"})));
        let doc: Named = fetch_document(&fetcher, "http://h/a").await.unwrap();
        assert_eq!(doc.name, "b");
    }
}
