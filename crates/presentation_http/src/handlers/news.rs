//! News proxy handler

use axum::{Json, extract::State, response::IntoResponse};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Top headlines for the configured country
///
/// GET /api/news
#[instrument(skip(state))]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let headlines = state.news.top_headlines().await?;
    Ok(Json(headlines))
}
