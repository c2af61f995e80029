//! WeatherAPI.com HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use domain::{Holiday, LocationSuggestion};

use crate::models::{ErrorBody, ForecastResponse, HolidaysResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; checked before any request is issued
    #[error("Weather API key is not configured")]
    MissingApiKey,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider answered with a non-success status
    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// WeatherAPI.com base URL (default: <https://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; requests fail closed while this is unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-14, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// Weather provider operations used by the proxy endpoints
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Fetch the multi-day forecast with air quality for a location query
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError>;

    /// Fetch the holiday list for a location and calendar year
    async fn holidays(&self, location: &str, year: i32) -> Result<Vec<Holiday>, WeatherError>;

    /// Search candidate locations for a partial query
    async fn search(&self, query: &str) -> Result<Vec<LocationSuggestion>, WeatherError>;
}

/// WeatherAPI.com HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// A missing API key is not an error here: requests fail closed at call
    /// time, so a server can boot unconfigured and report the condition per
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherApiConfig::default())
    }

    /// The configured API key, or `MissingApiKey` before any network call
    fn api_key(&self) -> Result<&str, WeatherError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(WeatherError::MissingApiKey)
    }

    /// Issue a GET against a provider endpoint and decode the JSON response.
    ///
    /// Non-success statuses surface the provider's own error message when its
    /// `{"error": {"message": ...}}` body parses, and a generic HTTP message
    /// otherwise.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{path}", self.config.base_url);
        debug!(url = %url, "Sending WeatherAPI request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.json::<ErrorBody>().await.map_or_else(
                |_| format!("HTTP {status}"),
                |body| body.error.message,
            );
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherApi for WeatherApiClient {
    #[instrument(skip(self), fields(location = %location))]
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError> {
        let key = self.api_key()?;
        let days = self.config.forecast_days.clamp(1, 14).to_string();

        self.get_json(
            "forecast.json",
            &[("key", key), ("q", location), ("days", &days), ("aqi", "yes")],
        )
        .await
    }

    #[instrument(skip(self), fields(location = %location, year = %year))]
    async fn holidays(&self, location: &str, year: i32) -> Result<Vec<Holiday>, WeatherError> {
        let key = self.api_key()?;
        let dt = format!("{year}-01-01");

        let response: HolidaysResponse = self
            .get_json("holidays.json", &[("key", key), ("q", location), ("dt", &dt)])
            .await?;

        Ok(response.holidays.into_iter().map(Holiday::from).collect())
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn search(&self, query: &str) -> Result<Vec<LocationSuggestion>, WeatherError> {
        let key = self.api_key()?;
        self.get_json("search.json", &[("key", key), ("q", query)])
            .await
    }
}
