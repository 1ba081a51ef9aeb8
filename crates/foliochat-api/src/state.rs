//! Application state wiring the services together.
//!
//! AppState holds the concrete service instances used by the HTTP handlers.
//! Services are generic over the storage trait, but AppState pins them to
//! the in-memory infra implementation. The completion provider is
//! type-erased, so tests can wire in a deterministic stub while production
//! uses the OpenAI client.

use std::sync::Arc;

use foliochat_core::chat::ChatService;
use foliochat_core::contact::ContactService;
use foliochat_core::llm::BoxCompletionProvider;
use foliochat_infra::config::resolve_api_key;
use foliochat_infra::llm::OpenAiProvider;
use foliochat_infra::store::MemStorage;

/// Concrete type aliases pinned to the infra storage implementation.
pub type ConcreteChatService = ChatService<MemStorage>;
pub type ConcreteContactService = ContactService<MemStorage>;

/// Shared application state holding the services.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub contact_service: Arc<ConcreteContactService>,
}

impl AppState {
    /// Wire the production state: fresh in-memory store, OpenAI provider
    /// with the credential resolved from the environment.
    pub fn init() -> Self {
        let provider = BoxCompletionProvider::new(OpenAiProvider::new(resolve_api_key()));
        Self::with_provider(provider)
    }

    /// Wire a fresh state around the given provider.
    ///
    /// Both services share one store; each call builds an independent store,
    /// which is what lets every test run against its own empty collections.
    pub fn with_provider(provider: BoxCompletionProvider) -> Self {
        let storage = Arc::new(MemStorage::new());
        Self {
            chat_service: Arc::new(ChatService::new(storage.clone(), provider)),
            contact_service: Arc::new(ContactService::new(storage)),
        }
    }
}
