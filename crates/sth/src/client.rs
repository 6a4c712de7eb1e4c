//! HTTP client for STH-Comet attribute history queries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::records::{HistoryResponse, RawSample};

/// Per-request timeout. One unreachable attribute must not stall the
/// whole refresh cycle, so this bounds every history query.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection details for one STH-Comet instance and the entity it tracks.
#[derive(Debug, Clone)]
pub struct SthConfig {
    /// Base HTTP URL, e.g. `http://broker-host:8666`.
    pub base_url: String,
    /// NGSI entity type, e.g. `ESP32`.
    pub entity_type: String,
    /// NGSI entity id, e.g. `urn:ngsi-ld:esp32_001`.
    pub entity_id: String,
    /// `Fiware-Service` header (tenant).
    pub service: String,
    /// `Fiware-ServicePath` header (tenant sub-path).
    pub service_path: String,
}

/// Errors from the STH history API layer.
#[derive(Debug, thiserror::Error)]
pub enum SthError {
    /// The HTTP request itself failed (network, DNS, timeout) or the
    /// response body was not the expected JSON.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// STH returned a non-2xx status code.
    #[error("STH API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Anything the refresh scheduler can pull attribute history from.
///
/// Production uses [`SthClient`]; tests substitute an in-memory fake.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Fetch the last `last_n` recorded values of `attribute`, in the
    /// order the source returns them.
    async fn fetch(&self, attribute: &str, last_n: u32) -> Result<Vec<RawSample>, SthError>;
}

#[async_trait]
impl<T: SampleSource + ?Sized> SampleSource for Arc<T> {
    async fn fetch(&self, attribute: &str, last_n: u32) -> Result<Vec<RawSample>, SthError> {
        (**self).fetch(attribute, last_n).await
    }
}

/// HTTP client for a single STH-Comet instance.
pub struct SthClient {
    client: reqwest::Client,
    config: SthConfig,
}

impl SthClient {
    /// Create a client with the standard per-request timeout.
    pub fn new(config: SthConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("reqwest client construction cannot fail with these options");
        Self { client, config }
    }

    /// Create a client reusing an existing [`reqwest::Client`]. The caller
    /// is responsible for configuring a timeout on it.
    pub fn with_client(client: reqwest::Client, config: SthConfig) -> Self {
        Self { client, config }
    }

    fn history_url(&self, attribute: &str, last_n: u32) -> String {
        format!(
            "{}/STH/v1/contextEntities/type/{}/id/{}/attributes/{}?lastN={}",
            self.config.base_url,
            self.config.entity_type,
            self.config.entity_id,
            attribute,
            last_n,
        )
    }
}

#[async_trait]
impl SampleSource for SthClient {
    async fn fetch(&self, attribute: &str, last_n: u32) -> Result<Vec<RawSample>, SthError> {
        let response = self
            .client
            .get(self.history_url(attribute, last_n))
            .header("Fiware-Service", &self.config.service)
            .header("Fiware-ServicePath", &self.config.service_path)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SthError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let history = response.json::<HistoryResponse>().await?;
        let samples = history.into_samples();
        tracing::debug!(attribute, count = samples.len(), "Fetched attribute history");
        Ok(samples)
    }
}
