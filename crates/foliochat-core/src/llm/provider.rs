//! CompletionProvider trait definition.
//!
//! The narrow seam around the hosted language-model API: one fixed persona
//! instruction plus one user turn in, generated text or a typed failure out.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).
//!
//! Implementations live in foliochat-infra (e.g., `OpenAiProvider`). Tests
//! substitute a deterministic stub via [`super::BoxCompletionProvider`] and
//! never touch the network.

use foliochat_types::error::LlmError;
use foliochat_types::llm::{CompletionRequest, CompletionResponse};

/// Trait for completion provider backends.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a single-turn completion request and receive the full response.
    ///
    /// A response with no text is a *successful* outcome
    /// (`CompletionResponse { text: None }`); `Err` is reserved for
    /// transport and API-level failures.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
