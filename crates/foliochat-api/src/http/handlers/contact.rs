//! Contact form endpoints.
//!
//! POST /api/contact -- validate and persist a submission.
//! GET /api/contact-messages -- full submission history, newest first.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use foliochat_types::contact::{ContactForm, ContactMessage};

use crate::http::error::AppError;
use crate::state::AppState;

/// Acknowledgment body for POST /api/contact.
#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub message: &'static str,
    pub id: i64,
}

/// POST /api/contact
///
/// The body is parsed into [`ContactForm`] after extraction so a shape
/// mismatch maps to the fixed 400 body rather than axum's default
/// rejection. Nothing is persisted on validation failure.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ContactAck>, AppError> {
    let form: ContactForm = serde_json::from_value(body)
        .map_err(|_| AppError::InvalidInput("Invalid contact form data"))?;

    let saved = state.contact_service.submit(form).await.map_err(|e| {
        error!(error = %e, "contact submission failed");
        AppError::Internal("Failed to send contact message")
    })?;

    Ok(Json(ContactAck {
        message: "Contact message sent successfully!",
        id: saved.id,
    }))
}

/// GET /api/contact-messages
pub async fn contact_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let messages = state.contact_service.list().await.map_err(|e| {
        error!(error = %e, "contact messages fetch failed");
        AppError::Internal("Failed to fetch contact messages")
    })?;

    Ok(Json(messages))
}
