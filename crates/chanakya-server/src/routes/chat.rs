use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chanakya_core::{ChanakyaError, ChatHistory, Message, PermaScores, Persona, UserContext};
use chanakya_prompts::{GeneralPromptInput, PermaPromptInput, PromptError};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{bad_body, to_error, ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat/prompt", post(chat_prompt))
        .route("/api/perma/prompt", post(perma_prompt))
}

#[derive(Debug, Deserialize)]
struct ChatTurn {
    message: String,
    #[serde(flatten)]
    user: UserContext,
    #[serde(default)]
    history: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct PermaTurn {
    message: String,
    #[serde(default)]
    scores: PermaScores,
    #[serde(default)]
    history: Vec<Message>,
}

fn require_message(message: &str) -> Result<&str, ApiError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(to_error(PromptError::InvalidInput(
            ChanakyaError::InvalidInput("message is empty".into()),
        )));
    }
    Ok(trimmed)
}

/// Build the general coaching prompt for one chat turn.
async fn chat_prompt(
    State(state): State<AppState>,
    payload: Result<Json<ChatTurn>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(turn) = payload.map_err(bad_body)?;
    let message = require_message(&turn.message)?;
    let mut user = turn.user;
    user.observe_message(message);

    let history = ChatHistory::from(turn.history);
    let input = GeneralPromptInput::from_turn(&user, &history, state.history_limit, message);
    let prompt = input.render().map_err(to_error)?;

    let persona = user.persona();
    info!(
        persona = persona.name(),
        mood = %user.mood,
        history = history.len(),
        "prepared chat prompt"
    );

    let budget = user.budget().map(|b| {
        json!({
            "balance": b.balance(),
            "deficit": b.is_deficit(),
            "savings_rate": b.savings_rate(),
        })
    });

    Ok(Json(json!({
        "assistant_name": persona.name(),
        "mood": user.mood,
        "budget": budget,
        "prompt": prompt,
    })))
}

/// Build the PERMA coaching prompt for one mood-tracker turn.
async fn perma_prompt(
    State(state): State<AppState>,
    payload: Result<Json<PermaTurn>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(turn) = payload.map_err(bad_body)?;
    let message = require_message(&turn.message)?;
    turn.scores.validate().map_err(|e| to_error(e.into()))?;

    let history = ChatHistory::from(turn.history);
    let input =
        PermaPromptInput::from_scores(&turn.scores, &history, state.history_limit, message);
    let prompt = input.render().map_err(to_error)?;

    let focus = turn.scores.weakest().map(|(pillar, _)| {
        json!({ "pillar": pillar, "name": pillar.display_name(), "icon": pillar.icon() })
    });
    info!(history = history.len(), "prepared perma prompt");

    Ok(Json(json!({
        "assistant_name": Persona::Sathya.name(),
        "focus": focus,
        "prompt": prompt,
    })))
}
