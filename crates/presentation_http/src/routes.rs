//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather API
        .route("/api/weather", get(handlers::weather::get_weather))
        .route("/api/weather/search", get(handlers::weather::search_locations))
        .route("/api/weather/dashboard", get(handlers::dashboard::get_dashboard))
        // News API
        .route("/api/news", get(handlers::news::get_news))
        // Attach state
        .with_state(state)
}
