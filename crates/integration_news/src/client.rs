//! NewsAPI.org HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{HeadlinesResponse, NewsErrorBody};

/// News client errors
#[derive(Debug, Error)]
pub enum NewsError {
    /// No API key configured; checked before any request is issued
    #[error("News API key is not configured")]
    MissingApiKey,

    /// Connection to the news service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the news service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the news service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider answered with a non-success status
    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },
}

/// News service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// NewsAPI.org base URL (default: <https://newsapi.org/v2>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; requests fail closed while this is unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// Country code for top headlines (default: "us")
    #[serde(default = "default_country")]
    pub country: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            country: default_country(),
            timeout_secs: default_timeout(),
        }
    }
}

/// News provider operations used by the proxy endpoint
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetch top headlines for the configured country
    async fn top_headlines(&self) -> Result<HeadlinesResponse, NewsError>;
}

/// NewsAPI.org HTTP client implementation
#[derive(Debug)]
pub struct NewsApiClient {
    client: Client,
    config: NewsConfig,
}

impl NewsApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: NewsConfig) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NewsError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, NewsError> {
        Self::new(NewsConfig::default())
    }

    /// The configured API key, or `MissingApiKey` before any network call
    fn api_key(&self) -> Result<&str, NewsError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(NewsError::MissingApiKey)
    }
}

#[async_trait]
impl NewsApi for NewsApiClient {
    #[instrument(skip(self), fields(country = %self.config.country))]
    async fn top_headlines(&self) -> Result<HeadlinesResponse, NewsError> {
        let key = self.api_key()?;
        let url = format!("{}/top-headlines", self.config.base_url);
        debug!(url = %url, "Sending NewsAPI request");

        let response = self
            .client
            .get(&url)
            .query(&[("country", self.config.country.as_str())])
            .header("X-Api-Key", key)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    NewsError::ConnectionFailed(e.to_string())
                } else {
                    NewsError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // NewsAPI error format is { status, code, message }
            let message = response
                .json::<NewsErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(NewsError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))
    }
}
