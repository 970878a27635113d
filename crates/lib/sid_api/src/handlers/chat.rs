//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::chat;

/// `POST /api/chat` — send a message, get the model's (or a substitute) reply.
///
/// The credential is checked before the body is looked at, so a server with
/// no API key answers 500 to every chat request.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    state.config.require_credential()?;
    let Json(request) = payload?;

    let data = chat::reply(&state, request).await?;
    Ok(Json(ChatResponse::ok(data)))
}
