//! LLM request/response types.
//!
//! A single-turn completion: one fixed system prompt plus one user message
//! in, generated text out. Providers that speak a multi-message wire format
//! (OpenAI, Anthropic) expand this shape into their own request types.

use serde::{Deserialize, Serialize};

/// Request to a completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// The fixed persona instruction sent as the system turn.
    pub system: String,
    /// The user's message, sent as a single user turn.
    pub message: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Response from a completion provider.
///
/// `text` is `None` when the provider answered successfully but produced no
/// content. That outcome is distinct from a transport/API failure and is
/// handled by the chat service with a fallback reply, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_serialize() {
        let req = CompletionRequest {
            model: "gpt-4o".to_string(),
            system: "You are a helpful bot.".to_string(),
            message: "hi".to_string(),
            max_tokens: 300,
            temperature: 0.7,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"model\":\"gpt-4o\""));
        assert!(json.contains("\"max_tokens\":300"));
    }

    #[test]
    fn test_completion_response_absent_text() {
        let resp: CompletionResponse = serde_json::from_str(r#"{"text":null}"#).unwrap();
        assert!(resp.text.is_none());
    }
}
