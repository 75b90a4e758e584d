//! HTTP transport seam.
//!
//! The gateway talks to the backend through the `Transport` trait so tests
//! can substitute an in-memory stub. The real implementation wraps a shared
//! `reqwest::Client` with a cookie store, since the backend issues its
//! session as an HTTP cookie on login.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GatewayError;

/// Raw reply from one transport-level call, before envelope decoding.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Backend-agnostic HTTP transport covering the two verbs the API uses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET against `path` (relative to the backend base URL).
    async fn get(&self, path: &str) -> Result<TransportReply, GatewayError>;

    /// Perform a POST with a JSON body.
    async fn post_json(&self, path: &str, body: Value) -> Result<TransportReply, GatewayError>;
}

/// Production transport over reqwest.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport rooted at `base_url`, with cookies enabled so the
    /// session cookie set on login rides along on subsequent calls.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| GatewayError::Transport {
                path: base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn read_reply(
        path: &str,
        response: reqwest::Response,
    ) -> Result<TransportReply, GatewayError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(TransportReply { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<TransportReply, GatewayError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::read_reply(path, response).await
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<TransportReply, GatewayError> {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::read_reply(path, response).await
    }
}
