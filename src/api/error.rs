//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde_json::json;

use crate::constants::{ERROR_INTERNAL, ERROR_VALIDATION_FAILED};
use crate::integrations::IntegrationError;
use crate::repositories::RepoError;
use crate::schema::ValidationError;

/// Every failure a handler can return
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 with field-level details
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 404; carries the entity name
    #[error("{0} not found")]
    NotFound(&'static str),

    /// 500 with a message safe to show the client
    #[error("{0}")]
    Unavailable(String),

    /// 500 with a generic message; the cause is only logged
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(e) => ApiError::Validation(e),
            RepoError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl From<IntegrationError> for ApiError {
    fn from(err: IntegrationError) -> Self {
        match err {
            IntegrationError::InvalidRequest(message) => ApiError::Validation(ValidationError::single("query", message)),
            IntegrationError::NotConfigured(what) => ApiError::Unavailable(what),
            IntegrationError::Upstream { service, message } => {
                warn!("{} upstream failed: {}", service, message);
                ApiError::Unavailable(format!("{} service unavailable", service))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": ERROR_VALIDATION_FAILED, "details": e.errors })),
            )
                .into_response(),
            ApiError::NotFound(name) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{} not found", name) })),
            )
                .into_response(),
            ApiError::Unavailable(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(e) => {
                error!("Request failed: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": ERROR_INTERNAL }))).into_response()
            }
        }
    }
}
