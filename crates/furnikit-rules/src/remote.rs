//! Remote model seam
//!
//! A [`RemoteModel`] produces [`TechnicalSpecs`] for a request somewhere
//! other than the local rule engines. The orchestrator treats every failure
//! here as recoverable.

use crate::error::{RemoteGenerationError, RemoteResult};
use crate::params::DesignRequest;
use furnikit_core::TechnicalSpecs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default request timeout for remote generation (ms)
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 30_000;

/// Endpoint settings for [`HttpRemoteModel`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteModelConfig {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_MS
}

impl RemoteModelConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
        }
    }

    /// Endpoint and key are both present
    pub fn is_usable(&self) -> bool {
        !self.url.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

/// Something that can design furniture for a request
pub trait RemoteModel: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    fn generate(&self, request: &DesignRequest) -> RemoteResult<TechnicalSpecs>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteResponse {
    technical_specs: TechnicalSpecs,
}

/// JSON-over-HTTP model endpoint with bearer authentication
pub struct HttpRemoteModel {
    config: RemoteModelConfig,
    client: reqwest::blocking::Client,
}

impl HttpRemoteModel {
    pub fn new(config: RemoteModelConfig) -> RemoteResult<Self> {
        if !config.is_usable() {
            return Err(RemoteGenerationError::NotConfigured(
                "url and api_key are required".to_string(),
            ));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RemoteModelConfig {
        &self.config
    }
}

impl RemoteModel for HttpRemoteModel {
    fn name(&self) -> &str {
        "http"
    }

    fn generate(&self, request: &DesignRequest) -> RemoteResult<TechnicalSpecs> {
        debug!(url = %self.config.url, "requesting remote design");

        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteGenerationError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text()?;
        let parsed: RemoteResponse = serde_json::from_str(&body)
            .map_err(|e| RemoteGenerationError::Malformed(e.to_string()))?;
        Ok(parsed.technical_specs)
    }
}
