//! Contact service: persistence and retrieval of contact submissions.
//!
//! Shape validation happens at the HTTP boundary (deserializing into
//! [`ContactForm`]); by the time a form reaches this service it is valid.

use std::sync::Arc;

use tracing::debug;

use foliochat_types::contact::{ContactForm, ContactMessage};
use foliochat_types::error::RepositoryError;

use crate::repository::Storage;

/// Thin orchestration layer over the contact collection.
pub struct ContactService<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> ContactService<S> {
    /// Create a new contact service over a shared store.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Persist a validated contact submission and return the stored record
    /// (callers acknowledge with its id).
    pub async fn submit(&self, form: ContactForm) -> Result<ContactMessage, RepositoryError> {
        let saved = self.storage.save_contact_message(&form).await?;
        debug!(id = saved.id, "contact submission persisted");
        Ok(saved)
    }

    /// Full contact history, newest first.
    pub async fn list(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        self.storage.get_contact_messages().await
    }
}
