//! Health check handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether a weather API key is configured
    pub weather_configured: bool,
    /// Whether a news API key is configured
    pub news_configured: bool,
}

/// Liveness check - is the server running and configured?
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        weather_configured: state.config.weather.api_key.is_some(),
        news_configured: state.config.news.api_key.is_some(),
    })
}
