//! API error handling
//!
//! Every failure surfaces to clients as a JSON body of the shape
//! `{ "error": "<message>" }` with an appropriate status code. Provider
//! failures mirror the upstream status so the browser sees the same
//! code the provider answered with.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_news::NewsError;
use integration_weather::WeatherError;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Self::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message,
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::MissingApiKey => Self::Configuration(err.to_string()),
            WeatherError::Upstream { status, message } => Self::Upstream { status, message },
            WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ParseError(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<NewsError> for ApiError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::MissingApiKey => Self::Configuration(err.to_string()),
            NewsError::Upstream { status, message } => Self::Upstream { status, message },
            NewsError::ConnectionFailed(_)
            | NewsError::RequestFailed(_)
            | NewsError::ParseError(_) => Self::Internal(err.to_string()),
        }
    }
}
