use thiserror::Error;

/// Errors surfaced by a storage backend.
///
/// The in-memory backend never fails, but the trait contract allows it so a
/// persistent backend can be slotted in without touching handler code.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from a completion provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors from the chat exchange flow.
///
/// `Upstream` covers transport/API-level provider failures only; a provider
/// reply with no text is NOT an error (the service substitutes a fallback
/// string and persists the exchange as a success).
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Upstream(#[from] LlmError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 503".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 503");
        assert_eq!(
            LlmError::AuthenticationFailed.to_string(),
            "authentication failed"
        );
    }

    #[test]
    fn test_chat_error_transparent() {
        let err: ChatError = LlmError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "authentication failed");

        let err: ChatError = RepositoryError::Storage("disk full".to_string()).into();
        assert_eq!(err.to_string(), "storage error: disk full");
    }
}
