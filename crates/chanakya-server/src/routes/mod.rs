pub mod chat;
pub mod health;
pub mod persona;
pub mod prompts;

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json, Router};
use chanakya_prompts::PromptError;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub struct InnerAppState {
    /// Substituted for missing placeholders; `None` rejects incomplete renders.
    pub missing_default: Option<String>,
    pub history_limit: usize,
}

pub type AppState = Arc<InnerAppState>;

pub fn app_state(config: &ServerConfig) -> AppState {
    Arc::new(InnerAppState {
        missing_default: config.missing_default.clone(),
        history_limit: config.history_limit,
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(prompts::routes())
        .merge(chat::routes())
        .merge(persona::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub(crate) type ApiError = (StatusCode, Json<Value>);

pub(crate) fn to_error(e: PromptError) -> ApiError {
    let status = match &e {
        PromptError::UnknownTemplate(_) => StatusCode::NOT_FOUND,
        PromptError::MissingPlaceholder { .. } | PromptError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
    };
    warn!("request failed: {e}");
    (status, Json(json!({ "error": e.to_string() })))
}

/// Malformed request bodies get the same JSON error shape as other failures.
pub(crate) fn bad_body(rejection: JsonRejection) -> ApiError {
    let msg = rejection.body_text();
    warn!("rejected request body: {msg}");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}
