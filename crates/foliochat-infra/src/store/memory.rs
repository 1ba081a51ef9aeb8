//! MemStorage -- in-memory [`Storage`] implementation.
//!
//! Three independent collections (users, chat exchanges, contact
//! submissions), each a mutex-guarded table pairing an id counter with a
//! `BTreeMap`. Counter read and row insert happen under one lock, so two
//! concurrent creates on the same collection can never receive the same id.
//! No await point ever sits inside a critical section.
//!
//! The store is volatile: everything resets on process restart. That is the
//! intended lifecycle, not a limitation to paper over.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use foliochat_core::repository::Storage;
use foliochat_types::chat::{ChatMessage, NewChatMessage};
use foliochat_types::contact::{ContactForm, ContactMessage};
use foliochat_types::error::RepositoryError;
use foliochat_types::user::{NewUser, User};

/// One collection: an id counter plus rows keyed by id.
///
/// Ids start at 1 and strictly increase; they are never reused. `BTreeMap`
/// keeps iteration in id order, which doubles as insertion order.
struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Assign the next id, build the row with it, and insert it.
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn values(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

/// In-memory record store with per-collection locking.
pub struct MemStorage {
    users: Mutex<Table<User>>,
    chat_messages: Mutex<Table<ChatMessage>>,
    contact_messages: Mutex<Table<ContactMessage>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Table::new()),
            chat_messages: Mutex::new(Table::new()),
            contact_messages: Mutex::new(Table::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock a collection, surfacing poisoning as a repository error instead of
/// panicking in request context.
fn lock<T>(table: &Mutex<Table<T>>) -> Result<MutexGuard<'_, Table<T>>, RepositoryError> {
    table
        .lock()
        .map_err(|_| RepositoryError::Storage("collection lock poisoned".to_string()))
}

impl Storage for MemStorage {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut users = lock(&self.users)?;
        Ok(users.insert_with(|id| User {
            id,
            username: user.username.clone(),
            password: user.password.clone(),
        }))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let users = lock(&self.users)?;
        Ok(users.rows.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = lock(&self.users)?;
        // First match in insertion order; uniqueness is not enforced.
        Ok(users
            .rows
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn save_chat_message(
        &self,
        message: &NewChatMessage,
    ) -> Result<ChatMessage, RepositoryError> {
        let mut chat = lock(&self.chat_messages)?;
        Ok(chat.insert_with(|id| ChatMessage {
            id,
            message: message.message.clone(),
            response: message.response.clone(),
            timestamp: Utc::now(),
        }))
    }

    async fn get_chat_messages(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let chat = lock(&self.chat_messages)?;
        let mut messages = chat.values();
        // Id is the tie-break: equal timestamps keep creation order.
        messages.sort_by_key(|m| (m.timestamp, m.id));
        Ok(messages)
    }

    async fn save_contact_message(
        &self,
        form: &ContactForm,
    ) -> Result<ContactMessage, RepositoryError> {
        let mut contact = lock(&self.contact_messages)?;
        Ok(contact.insert_with(|id| ContactMessage {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            timestamp: Utc::now(),
        }))
    }

    async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let contact = lock(&self.contact_messages)?;
        let mut messages = contact.values();
        // Newest first -- deliberately the opposite order from chat history.
        messages.sort_by_key(|m| std::cmp::Reverse((m.timestamp, m.id)));
        Ok(messages)
    }
}
