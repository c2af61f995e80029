//! Application state shared across handlers

use std::sync::Arc;

use integration_news::NewsApi;
use integration_weather::WeatherApi;

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather provider for forecasts, holidays, and location search
    pub weather: Arc<dyn WeatherApi>,
    /// News provider for top headlines
    pub news: Arc<dyn NewsApi>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("weather", &"<WeatherApi>")
            .field("news", &"<NewsApi>")
            .field("config", &self.config)
            .finish()
    }
}
