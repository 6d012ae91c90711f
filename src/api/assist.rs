//! Endpoints backed by simulated collaborators.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::AppState;
use crate::integrations::{CalendarSyncReport, Idea};
use crate::schema::ValidationError;
use crate::utils::datetime;

const DEFAULT_IDEA_COUNT: usize = 5;
const MAX_IDEA_COUNT: usize = 10;

/// Brainstorm, calendar sync and theme routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/brainstorm", post(brainstorm))
        .route("/api/calendar/sync", post(calendar_sync))
        .route("/api/theme", get(theme))
}

#[derive(Debug, Deserialize)]
struct BrainstormRequest {
    topic: String,
    count: Option<usize>,
}

async fn brainstorm(
    State(state): State<AppState>,
    body: Result<Json<BrainstormRequest>, JsonRejection>,
) -> Result<Json<Vec<Idea>>, ApiError> {
    let Json(request) = body.map_err(|e| ValidationError::single("body", e.body_text()))?;
    let count = request.count.unwrap_or(DEFAULT_IDEA_COUNT);
    if count == 0 || count > MAX_IDEA_COUNT {
        return Err(ValidationError::single("count", format!("must be between 1 and {}", MAX_IDEA_COUNT)).into());
    }

    let ideas = state.integrations.brainstorm.brainstorm(&request.topic, count).await?;
    Ok(Json(ideas))
}

async fn calendar_sync(State(state): State<AppState>) -> Result<Json<CalendarSyncReport>, ApiError> {
    Ok(Json(state.integrations.calendar.sync().await?))
}

#[derive(Debug, Deserialize)]
struct ThemeQuery {
    /// `HH:MM`; defaults to the current local time
    time: Option<String>,
}

async fn theme(
    State(state): State<AppState>,
    query: Result<Query<ThemeQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query.map_err(|e| ValidationError::single("query", e.body_text()))?;
    let time = match query.time {
        Some(time) => datetime::parse_time(&time)
            .map_err(|_| ValidationError::single("time", "must be a time in HH:MM format"))?,
        None => Local::now().time(),
    };

    let theme = state.integrations.theme.theme_at(time);
    Ok(Json(json!({
        "theme": theme,
        "time": time.format(datetime::TIME_FORMAT).to_string(),
    })))
}
