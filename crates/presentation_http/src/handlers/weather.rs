//! Weather proxy handlers
//!
//! `/api/weather` fans out to the forecast and holidays endpoints of the
//! provider concurrently. The forecast is required; holidays are a nice-to-
//! have and degrade to an empty list when their fetch fails.

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{Datelike, Utc};
use domain::Holiday;
use integration_weather::{ForecastResponse, WeatherBundle, WeatherError};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Query parameters for `/api/weather`
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    /// Location to forecast, e.g. "Berlin" or "52.52,13.40"
    pub location: Option<String>,
}

/// Query parameters for `/api/weather/search`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text location query
    pub query: Option<String>,
}

/// Reject missing or blank query values before anything leaves the server.
pub(crate) fn required_param(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} parameter is required")))
}

/// Merge the two provider results into one response.
///
/// A failed forecast fails the request; failed holidays only log a warning
/// and yield an empty list.
fn combine_weather(
    forecast: Result<ForecastResponse, WeatherError>,
    holidays: Result<Vec<Holiday>, WeatherError>,
) -> Result<WeatherBundle, ApiError> {
    let forecast = forecast?;
    let holidays = holidays.unwrap_or_else(|e| {
        warn!(error = %e, "Holiday fetch failed, continuing without holidays");
        Vec::new()
    });
    Ok(WeatherBundle { forecast, holidays })
}

/// Forecast plus holidays for a location
///
/// GET /api/weather?location=...
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let location = required_param(params.location, "location")?;
    let year = Utc::now().year();

    let (forecast, holidays) = tokio::join!(
        state.weather.forecast(&location),
        state.weather.holidays(&location, year),
    );

    Ok(Json(combine_weather(forecast, holidays)?))
}

/// Location autocomplete
///
/// GET /api/weather/search?query=...
#[instrument(skip(state))]
pub async fn search_locations(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let query = required_param(params.query, "query")?;
    let suggestions = state.weather.search(&query).await?;
    Ok(Json(suggestions))
}
