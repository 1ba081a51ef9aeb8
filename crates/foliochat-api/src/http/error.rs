//! Application error type mapping to HTTP status codes.
//!
//! The wire format is the flat `{"error": "..."}` object the frontend
//! already consumes. Messages are the fixed per-route strings; internal
//! detail is logged at the handler boundary and never exposed to callers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Client sent a malformed or missing field. Always 400.
    InvalidInput(&'static str),
    /// Anything else: upstream provider failure, storage failure,
    /// serialization failure. Always 500 with a generic message.
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_input_is_400_with_flat_error_body() {
        let response = AppError::InvalidInput("Message is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Message is required" })
        );
    }

    #[tokio::test]
    async fn internal_is_500_with_flat_error_body() {
        let response = AppError::Internal("Failed to process chat message").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to process chat message" })
        );
    }
}
