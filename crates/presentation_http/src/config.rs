//! Application configuration
//!
//! Layered: built-in defaults, then an optional `config.toml`, then
//! `CLIMENDA_*` environment variables. The provider API keys additionally
//! honor the bare `WEATHER_API_KEY` / `NEWS_API_KEY` variables so a
//! dashboard deployment needs nothing but those two secrets.

use integration_news::NewsConfig;
use integration_weather::WeatherApiConfig;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: Some(30),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// WeatherAPI.com client settings
    #[serde(default)]
    pub weather: WeatherApiConfig,

    /// NewsAPI.org client settings
    #[serde(default)]
    pub news: NewsConfig,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a source is present but malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., CLIMENDA_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("CLIMENDA")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut app: Self = builder.build()?.try_deserialize()?;
        app.apply_key_fallbacks();
        Ok(app)
    }

    /// Fill unset provider keys from the conventional environment variables.
    fn apply_key_fallbacks(&mut self) {
        if self.weather.api_key.is_none()
            && let Ok(key) = std::env::var("WEATHER_API_KEY")
            && !key.is_empty()
        {
            self.weather.api_key = Some(key);
        }
        if self.news.api_key.is_none()
            && let Ok(key) = std::env::var("NEWS_API_KEY")
            && !key.is_empty()
        {
            self.news.api_key = Some(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.shutdown_timeout_secs, Some(30));
    }

    #[test]
    fn app_config_default_has_no_keys() {
        let config = AppConfig::default();
        assert!(config.weather.api_key.is_none());
        assert!(config.news.api_key.is_none());
    }

    #[test]
    fn deserializes_partial_toml() {
        let toml = r#"
            [server]
            port = 8080

            [weather]
            api_key = "abc"
        "#;
        let config: AppConfig = toml_from_str(toml);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.weather.api_key.as_deref(), Some("abc"));
        assert_eq!(config.news.country, "us");
    }

    fn toml_from_str(input: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(input, config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .expect("valid test config")
    }

    #[test]
    fn key_fallback_does_not_override_configured_key() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some("from-config".to_string());
        config.apply_key_fallbacks();
        assert_eq!(config.weather.api_key.as_deref(), Some("from-config"));
    }
}
