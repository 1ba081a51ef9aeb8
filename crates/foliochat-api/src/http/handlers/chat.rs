//! Chat endpoints.
//!
//! POST /api/chat -- run one exchange with the bot and persist it.
//! GET /api/chat-history -- full exchange history, oldest first.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use foliochat_types::chat::ChatMessage;

use crate::http::error::AppError;
use crate::state::AppState;

/// Success body for POST /api/chat. Only the reply text is exposed; the
/// persisted record's id is not part of this contract.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat
///
/// The body is taken as raw JSON so the `message` check reproduces the
/// historical contract exactly: the field must be present, a string, and
/// non-empty, otherwise 400 with no side effects and no collaborator call.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match body.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => message,
        _ => return Err(AppError::InvalidInput("Message is required")),
    };

    let saved = state.chat_service.send_message(message).await.map_err(|e| {
        error!(error = %e, "chat exchange failed");
        AppError::Internal("Failed to process chat message")
    })?;

    Ok(Json(ChatResponse {
        response: saved.response,
    }))
}

/// GET /api/chat-history
pub async fn chat_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let messages = state.chat_service.history().await.map_err(|e| {
        error!(error = %e, "chat history fetch failed");
        AppError::Internal("Failed to fetch chat history")
    })?;

    Ok(Json(messages))
}
