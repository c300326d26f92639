use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use chanakya_prompts::{assemble_prompt, TemplateKind, Values};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{bad_body, to_error, ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/prompts", get(list_prompts))
        .route("/api/prompts/{kind}", get(get_prompt))
        .route("/api/prompts/{kind}/render", post(render_prompt))
}

async fn list_prompts() -> Json<Value> {
    let kinds: Vec<Value> = TemplateKind::ALL
        .iter()
        .map(|k| {
            json!({
                "kind": k,
                "placeholders": k.template().placeholders(),
            })
        })
        .collect();
    Json(json!(kinds))
}

async fn get_prompt(Path(kind): Path<String>) -> Result<Json<Value>, ApiError> {
    let kind = TemplateKind::parse(&kind).map_err(to_error)?;
    let template = kind.template();
    Ok(Json(json!({
        "kind": kind,
        "placeholders": template.placeholders(),
        "template": template.source(),
    })))
}

#[derive(Debug, Deserialize)]
struct RenderRequest {
    #[serde(default)]
    values: Values,
    /// Overrides the server-wide missing-placeholder default.
    default: Option<String>,
}

async fn render_prompt(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload.map_err(bad_body)?;
    let kind = TemplateKind::parse(&kind).map_err(to_error)?;
    let default = req.default.as_deref().or(state.missing_default.as_deref());
    debug!(template = kind.as_str(), values = req.values.len(), "rendering prompt");
    let prompt = assemble_prompt(kind, &req.values, default).map_err(to_error)?;
    Ok(Json(json!({ "kind": kind, "prompt": prompt })))
}
