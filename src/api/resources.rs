//! Generic CRUD route group, instantiated once per entity type.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::error::ApiError;
use super::AppState;
use crate::entities::{
    Anniversary, Bookmark, Entity, Expense, Goal, Habit, JournalEntry, MealPlan, Milestone, Note, Project, Reminder,
    ScheduleEvent, Subscription, Task, WorkoutPlan, WorkoutSession,
};
use crate::repositories::ListFilter;
use crate::schema::ValidationError;

/// Mount the route group of every entity
pub fn routes() -> Router<AppState> {
    let router = Router::new();
    let router = resource::<Task>(router);
    let router = resource::<Habit>(router);
    let router = resource::<ScheduleEvent>(router);
    let router = resource::<Goal>(router);
    let router = resource::<Expense>(router);
    let router = resource::<Note>(router);
    let router = resource::<WorkoutPlan>(router);
    let router = resource::<WorkoutSession>(router);
    let router = resource::<MealPlan>(router);
    let router = resource::<Project>(router);
    let router = resource::<Milestone>(router);
    let router = resource::<Subscription>(router);
    let router = resource::<Anniversary>(router);
    let router = resource::<Reminder>(router);
    let router = resource::<JournalEntry>(router);
    resource::<Bookmark>(router)
}

/// `/api/<collection>` and `/api/<collection>/{id}` for one entity
pub fn resource<E: Entity>(router: Router<AppState>) -> Router<AppState> {
    let collection = format!("/api/{}", E::COLLECTION);
    let item = format!("/api/{}/{{id}}", E::COLLECTION);

    router
        .route(&collection, get(list::<E>).post(create::<E>).delete(clear::<E>))
        .route(
            &item,
            get(fetch::<E>).put(update::<E>).patch(update::<E>).delete(remove::<E>),
        )
}

fn body_error(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(ValidationError::single("body", rejection.body_text()))
}

fn query_error(rejection: QueryRejection) -> ApiError {
    ApiError::Validation(ValidationError::single("query", rejection.body_text()))
}

async fn list<E: Entity>(
    State(state): State<AppState>,
    filter: Result<Query<ListFilter>, QueryRejection>,
) -> Result<Json<Vec<E>>, ApiError> {
    let Query(filter) = filter.map_err(query_error)?;
    let records = state.repo::<E>().list(state.user_id(), &filter).await?;
    Ok(Json(records))
}

async fn fetch<E: Entity>(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<E>, ApiError> {
    state
        .repo::<E>()
        .get(state.user_id(), &id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(E::NAME))
}

async fn create<E: Entity>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<E>), ApiError> {
    let Json(body) = body.map_err(body_error)?;
    let record = state.repo::<E>().create(state.user_id(), body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<E>, ApiError> {
    let Json(body) = body.map_err(body_error)?;
    state
        .repo::<E>()
        .update(state.user_id(), &id, body)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(E::NAME))
}

async fn remove<E: Entity>(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    if state.repo::<E>().delete(state.user_id(), &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(E::NAME))
    }
}

async fn clear<E: Entity>(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let deleted = state.repo::<E>().clear(state.user_id()).await?;
    Ok(Json(json!({ "deleted": deleted })))
}
