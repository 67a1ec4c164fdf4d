//! HttpBackend - reqwest implementation of the backend contract

use std::time::Duration;

use async_trait::async_trait;
use chat_core::{ChatRequest, ChatResponse, HealthStatus};
use log::debug;
use reqwest::Client;
use url::Url;

use crate::backend::ChatBackend;
use crate::error::{BackendError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the backend chat service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client for the given base URL (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /health` for backend readiness.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        debug!(
            "POST {}/chat ({} history turns)",
            self.base_url,
            request.history.as_ref().map_or(0, Vec::len)
        );

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The error body is not part of the contract; don't parse it.
            return Err(BackendError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
