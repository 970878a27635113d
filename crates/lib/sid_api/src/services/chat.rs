//! Chat reply policy.
//!
//! Turns a validated message into a reply. A model answer is passed through;
//! when every candidate fails the user still gets a substitute reply marked
//! with [`MOCK_MODEL`], never an error.

use std::sync::Arc;

use sid_core::dispatch::DispatchResult;
use sid_core::filler::{MOCK_MODEL, MOCK_NOTE, filler_reply};
use tracing::{info, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatData, ChatRequest};

/// Extract the message, rejecting absent or empty ones.
pub fn validate(request: ChatRequest) -> AppResult<String> {
    match request.message {
        Some(message) if !message.is_empty() => Ok(message),
        _ => Err(AppError::Validation("Message is required".into())),
    }
}

/// Produce the reply for one chat request. The caller has already checked
/// the credential.
///
/// The dispatch runs on its own task, so a client that disconnects does not
/// cut the candidate walk short.
pub async fn reply(state: &AppState, request: ChatRequest) -> AppResult<ChatData> {
    let message = validate(request)?;

    info!(chars = message.chars().count(), "processing message");

    let dispatcher = Arc::clone(&state.dispatcher);
    let result = tokio::spawn(async move { dispatcher.dispatch(&message).await })
        .await
        .map_err(|e| AppError::Internal(format!("dispatch task failed: {e}")))?;

    match result {
        DispatchResult::Answered { model_id, text } => Ok(ChatData {
            response: text,
            model: model_id,
            note: None,
        }),
        DispatchResult::Exhausted { failures } => {
            warn!(
                attempts = failures.len(),
                "no model answered, using substitute reply"
            );
            Ok(ChatData {
                response: filler_reply(state.filler.as_ref()).to_string(),
                model: MOCK_MODEL.to_string(),
                note: Some(MOCK_NOTE.to_string()),
            })
        }
    }
}
