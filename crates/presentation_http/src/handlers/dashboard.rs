//! Normalized dashboard handler
//!
//! Serves the provider-agnostic `WeatherSnapshot` the dashboard widgets
//! consume, instead of the raw provider payload `/api/weather` relays.

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{Datelike, Utc};
use integration_weather::normalize;
use tracing::{instrument, warn};

use crate::{
    error::ApiError,
    handlers::weather::{LocationQuery, required_param},
    state::AppState,
};

/// Normalized forecast snapshot for a location
///
/// GET /api/weather/dashboard?location=...
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let location = required_param(params.location, "location")?;
    let year = Utc::now().year();

    let (forecast, holidays) = tokio::join!(
        state.weather.forecast(&location),
        state.weather.holidays(&location, year),
    );

    let forecast = forecast?;
    let holidays = holidays.unwrap_or_else(|e| {
        warn!(error = %e, "Holiday fetch failed, continuing without holidays");
        Vec::new()
    });

    let snapshot = normalize(&forecast, &holidays)?;
    Ok(Json(snapshot))
}
