//! Best-effort passthroughs to the quote and weather upstreams.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use super::error::ApiError;
use super::AppState;
use crate::constants::ERROR_WEATHER_FETCH_FAILED;
use crate::integrations::{IntegrationError, Quote, WeatherQuery, WeatherReport};
use crate::schema::ValidationError;

/// Quote and weather routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/quote", get(quote))
        .route("/api/weather", get(weather))
}

/// Always succeeds; serves the fallback quote when the upstream fails
async fn quote(State(state): State<AppState>) -> Json<Quote> {
    Json(state.integrations.quote_of_the_day().await)
}

async fn weather(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Query(query) = query.map_err(|e| ValidationError::single("query", e.body_text()))?;

    match state.integrations.weather.current_weather(&query).await {
        Ok(report) => Ok(Json(report)),
        Err(IntegrationError::Upstream { service, message }) => {
            log::warn!("{} upstream failed: {}", service, message);
            Err(ApiError::Unavailable(ERROR_WEATHER_FETCH_FAILED.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
