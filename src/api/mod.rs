//! HTTP surface of the dashboard.
//!
//! [`router`] assembles one CRUD route group per entity plus the proxy,
//! insight and assistant endpoints. Handlers reach the store and the
//! external collaborators only through [`AppState`].

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::entities::Entity;
use crate::integrations::Integrations;
use crate::logger::Logger;
use crate::repositories::Repository;
use crate::storage::DocumentStore;

pub mod assist;
pub mod error;
pub mod insights;
pub mod proxy;
pub mod resources;

pub use error::ApiError;

/// Shared request context, built once at startup
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
    pub integrations: Integrations,
    pub logger: Logger,
    user_id: Arc<str>,
}

impl AppState {
    /// Bundle the shared collaborators; the acting user comes from `config`
    pub fn new(config: &Config, store: Arc<dyn DocumentStore>, integrations: Integrations, logger: Logger) -> Self {
        Self {
            store,
            integrations,
            logger,
            user_id: Arc::from(config.server.user_id.as_str()),
        }
    }

    /// Identity every request acts as
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Repository for one entity over the shared store
    pub fn repo<E: Entity>(&self) -> Repository<E> {
        Repository::new(Arc::clone(&self.store))
    }
}

/// Build the complete application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/logs", get(recent_logs))
        .merge(resources::routes())
        .merge(proxy::routes())
        .merge(insights::routes())
        .merge(assist::routes())
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn recent_logs(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "logs": state.logger.get_logs() }))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} {} {}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
