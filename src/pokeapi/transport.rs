//! Remote-call capability
//!
//! The retrieval layer only needs "GET this URL, give me status and body".

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, instrument};

use crate::error::{PokedexError, Result};

/// Raw outcome of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    /// HTTP status code
    pub status: u16,
    /// Full response body
    pub body: Bytes,
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs GET requests.
///
/// Implementations return `Ok` for any response that arrived, whatever its
/// status; only failures to obtain a response are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RemoteResponse>;
}

// == HTTP Transport ==
/// Transport backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// A zero timeout is rejected.
    pub fn new(timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(PokedexError::Config(
                "HTTP timeout must be greater than zero".to_string(),
            ));
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PokedexError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<RemoteResponse> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| PokedexError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| PokedexError::Transport {
            url: url.to_string(),
            reason: format!("failed to read body: {}", e),
        })?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(RemoteResponse { status, body })
    }
}
