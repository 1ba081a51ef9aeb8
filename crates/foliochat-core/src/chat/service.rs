//! Chat service orchestrating the completion call and exchange persistence.
//!
//! One flow: build the fixed persona request, ask the provider, substitute
//! the fallback reply when no text comes back, persist the exchange, return
//! it. Only transport/API-level provider failures are errors; a reply with
//! no text is a successful exchange persisted with [`prompt::FALLBACK_REPLY`].

use std::sync::Arc;

use tracing::{debug, warn};

use foliochat_types::chat::{ChatMessage, NewChatMessage};
use foliochat_types::error::ChatError;
use foliochat_types::llm::CompletionRequest;

use crate::chat::prompt;
use crate::llm::BoxCompletionProvider;
use crate::repository::Storage;

/// Orchestrates chat exchanges against the completion provider and store.
///
/// Generic over `Storage` so tests can run against any in-memory double;
/// the provider is type-erased for the same reason.
pub struct ChatService<S: Storage> {
    storage: Arc<S>,
    provider: BoxCompletionProvider,
}

impl<S: Storage> ChatService<S> {
    /// Create a new chat service over a shared store and a provider.
    pub fn new(storage: Arc<S>, provider: BoxCompletionProvider) -> Self {
        Self { storage, provider }
    }

    /// Run one request/reply exchange and persist it.
    ///
    /// The persisted record is returned; callers decide how much of it to
    /// expose (the HTTP handler returns only the reply text).
    pub async fn send_message(&self, message: &str) -> Result<ChatMessage, ChatError> {
        let request = CompletionRequest {
            model: prompt::CHAT_MODEL.to_string(),
            system: prompt::PERSONA_PROMPT.to_string(),
            message: message.to_string(),
            max_tokens: prompt::MAX_RESPONSE_TOKENS,
            temperature: prompt::TEMPERATURE,
        };

        let completion = self.provider.complete(&request).await?;

        // Absent *or empty* text gets the fallback reply and still counts
        // as a successful exchange.
        let response = match completion.text.filter(|t| !t.is_empty()) {
            Some(text) => text,
            None => {
                warn!(provider = self.provider.name(), "completion returned no text, using fallback reply");
                prompt::FALLBACK_REPLY.to_string()
            }
        };

        let saved = self
            .storage
            .save_chat_message(&NewChatMessage {
                message: message.to_string(),
                response,
            })
            .await?;

        debug!(id = saved.id, "chat exchange persisted");
        Ok(saved)
    }

    /// Full chat history, oldest first.
    pub async fn history(&self) -> Result<Vec<ChatMessage>, ChatError> {
        Ok(self.storage.get_chat_messages().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use chrono::Utc;

    use foliochat_types::contact::{ContactForm, ContactMessage};
    use foliochat_types::error::{LlmError, RepositoryError};
    use foliochat_types::llm::CompletionResponse;
    use foliochat_types::user::{NewUser, User};

    use crate::llm::CompletionProvider;

    /// Minimal storage double: chat messages in a Vec, everything else
    /// unimplemented for these tests.
    #[derive(Default)]
    struct VecStorage {
        chat: Mutex<Vec<ChatMessage>>,
    }

    impl Storage for VecStorage {
        async fn create_user(&self, _user: &NewUser) -> Result<User, RepositoryError> {
            unreachable!("not exercised by chat service tests")
        }

        async fn get_user(&self, _id: i64) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn get_user_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn save_chat_message(
            &self,
            message: &NewChatMessage,
        ) -> Result<ChatMessage, RepositoryError> {
            let mut chat = self.chat.lock().unwrap();
            let saved = ChatMessage {
                id: chat.len() as i64 + 1,
                message: message.message.clone(),
                response: message.response.clone(),
                timestamp: Utc::now(),
            };
            chat.push(saved.clone());
            Ok(saved)
        }

        async fn get_chat_messages(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
            Ok(self.chat.lock().unwrap().clone())
        }

        async fn save_contact_message(
            &self,
            _form: &ContactForm,
        ) -> Result<ContactMessage, RepositoryError> {
            unreachable!("not exercised by chat service tests")
        }

        async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    /// Deterministic provider stub.
    struct StubProvider {
        reply: Result<Option<&'static str>, LlmError>,
    }

    impl CompletionProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    text: text.map(String::from),
                }),
                Err(LlmError::AuthenticationFailed) => Err(LlmError::AuthenticationFailed),
                Err(e) => Err(LlmError::Provider {
                    message: e.to_string(),
                }),
            }
        }
    }

    fn service(reply: Result<Option<&'static str>, LlmError>) -> (ChatService<VecStorage>, Arc<VecStorage>) {
        let storage = Arc::new(VecStorage::default());
        let provider = BoxCompletionProvider::new(StubProvider { reply });
        (ChatService::new(storage.clone(), provider), storage)
    }

    #[tokio::test]
    async fn send_message_persists_exchange() {
        let (svc, storage) = service(Ok(Some("hello")));

        let saved = svc.send_message("hi").await.unwrap();
        assert_eq!(saved.response, "hello");
        assert_eq!(saved.message, "hi");

        let history = storage.get_chat_messages().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].message, "hi");
        assert_eq!(history[0].response, "hello");
    }

    #[tokio::test]
    async fn absent_text_uses_fallback_and_persists() {
        let (svc, storage) = service(Ok(None));

        let saved = svc.send_message("hi").await.unwrap();
        assert_eq!(saved.response, prompt::FALLBACK_REPLY);
        assert_eq!(storage.get_chat_messages().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_text_uses_fallback_and_persists() {
        let (svc, _) = service(Ok(Some("")));

        let saved = svc.send_message("hi").await.unwrap();
        assert_eq!(saved.response, prompt::FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn provider_failure_is_upstream_error_with_no_persist() {
        let (svc, storage) = service(Err(LlmError::AuthenticationFailed));

        let err = svc.send_message("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Upstream(_)));
        assert!(storage.get_chat_messages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_is_delegated() {
        let (svc, _) = service(Ok(Some("hello")));
        assert!(svc.history().await.unwrap().is_empty());

        svc.send_message("one").await.unwrap();
        svc.send_message("two").await.unwrap();
        let history = svc.history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].message, "one");
    }
}
