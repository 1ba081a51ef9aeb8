//! OpenAiProvider -- concrete [`CompletionProvider`] implementation for the
//! OpenAI chat-completions API.
//!
//! Sends `POST /v1/chat/completions` with bearer authentication, expanding
//! the single-turn [`CompletionRequest`] into a system + user message pair.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use foliochat_core::llm::CompletionProvider;
use foliochat_types::error::LlmError;
use foliochat_types::llm::{CompletionRequest, CompletionResponse};

use super::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse};

/// OpenAI completion provider.
///
/// # API Key Security
///
/// The key is stored as a [`SecretString`] and only exposed when building
/// the authorization header. The struct intentionally does not derive
/// `Debug` so the key can never leak through formatting.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Expand the single-turn request into the OpenAI wire shape.
    fn to_openai_request(request: &CompletionRequest) -> OpenAiRequest {
        OpenAiRequest {
            model: request.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: request.system.clone(),
                },
                OpenAiMessage {
                    role: "user",
                    content: request.message.clone(),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Map a non-success HTTP status to a typed error.
    fn error_for_status(status: u16, body: String) -> LlmError {
        match status {
            401 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited {
                retry_after_ms: None,
            },
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {body}"),
            },
        }
    }
}

impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = Self::to_openai_request(request);
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status.as_u16(), error_body));
        }

        let openai_resp: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let text = openai_resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Deserialization("response contained no choices".to_string()))?
            .message
            .content;

        Ok(CompletionResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_expansion() {
        let request = CompletionRequest {
            model: "gpt-4o".to_string(),
            system: "persona".to_string(),
            message: "hi".to_string(),
            max_tokens: 300,
            temperature: 0.7,
        };
        let wire = OpenAiProvider::to_openai_request(&request);
        assert_eq!(wire.model, "gpt-4o");
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[0].content, "persona");
        assert_eq!(wire.messages[1].role, "user");
        assert_eq!(wire.max_tokens, 300);
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            OpenAiProvider::error_for_status(401, String::new()),
            LlmError::AuthenticationFailed
        ));
        assert!(matches!(
            OpenAiProvider::error_for_status(429, String::new()),
            LlmError::RateLimited { .. }
        ));
        match OpenAiProvider::error_for_status(503, "overloaded".to_string()) {
            LlmError::Provider { message } => {
                assert!(message.contains("503"));
                assert!(message.contains("overloaded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
