use axum::{extract::Query, routing::get, Json, Router};
use chanakya_core::{default_quick_replies, Gender, Persona};
use serde::Deserialize;
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/persona", get(get_persona))
}

#[derive(Debug, Deserialize)]
struct PersonaQuery {
    gender: Option<String>,
}

/// Assistant identity and opening message for a user of the given gender.
async fn get_persona(Query(q): Query<PersonaQuery>) -> Json<Value> {
    let gender = q
        .gender
        .as_deref()
        .map(Gender::parse_lenient)
        .unwrap_or_default();
    let persona = Persona::for_user(gender);
    Json(json!({
        "name": persona.name(),
        "gender": persona.gender(),
        "welcome_message": persona.welcome_message(),
        "quick_replies": default_quick_replies(),
    }))
}
