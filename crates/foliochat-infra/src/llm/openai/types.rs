//! Wire types for the OpenAI chat-completions API.
//!
//! Only the fields this backend actually sends and reads; the API returns
//! more (usage, finish_reason, ...) which serde ignores.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
pub struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<OpenAiMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// One message in the request conversation.
#[derive(Debug, Serialize)]
pub struct OpenAiMessage {
    pub role: &'static str,
    pub content: String,
}

/// Response body for a non-streaming completion.
#[derive(Debug, Deserialize)]
pub struct OpenAiResponse {
    pub choices: Vec<OpenAiChoice>,
}

/// One generated choice.
#[derive(Debug, Deserialize)]
pub struct OpenAiChoice {
    pub message: OpenAiResponseMessage,
}

/// The assistant message inside a choice.
///
/// `content` is nullable on the wire (e.g., tool-call-only responses), so
/// it stays an `Option` here and flows through as the "no text" outcome.
#[derive(Debug, Deserialize)]
pub struct OpenAiResponseMessage {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = OpenAiRequest {
            model: "gpt-4o".to_string(),
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: "You are a bot.".to_string(),
                },
                OpenAiMessage {
                    role: "user",
                    content: "hi".to_string(),
                },
            ],
            max_tokens: 300,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 300);
    }

    #[test]
    fn test_response_parse() {
        let resp: OpenAiResponse = serde_json::from_str(
            r#"{
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "hello"}, "finish_reason": "stop"}
                ],
                "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
            }"#,
        )
        .unwrap();
        assert_eq!(resp.choices[0].message.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_response_parse_null_content() {
        let resp: OpenAiResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert!(resp.choices[0].message.content.is_none());
    }
}
