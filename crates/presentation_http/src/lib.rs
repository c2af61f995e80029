//! HTTP API server for the Climenda weather dashboard
//!
//! Thin proxy endpoints over the weather and news providers so API keys
//! never reach the browser, plus a normalized dashboard endpoint.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ServerConfig};
pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
