//! Storage trait definition.
//!
//! One narrow capability interface over the three record collections:
//! users, chat exchanges, and contact submissions. Each collection assigns
//! its own strictly increasing integer ids starting at 1; timestamps are
//! assigned by the store at write time.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition). The default
//! implementation is the in-memory `MemStorage` in foliochat-infra; the
//! `Result` contract leaves room for a persistent backend that can fail.

use foliochat_types::chat::{ChatMessage, NewChatMessage};
use foliochat_types::contact::{ContactForm, ContactMessage};
use foliochat_types::error::RepositoryError;
use foliochat_types::user::{NewUser, User};

/// Repository trait for all Foliochat record persistence.
pub trait Storage: Send + Sync {
    /// Create a user with a fresh id. Does NOT check username uniqueness.
    fn create_user(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Get a user by id. Absence is a normal result, not a failure.
    fn get_user(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Get the first user whose username matches, scanning in insertion
    /// order. The contract does not assume usernames are unique.
    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Persist a chat exchange with a fresh id and store-assigned timestamp.
    fn save_chat_message(
        &self,
        message: &NewChatMessage,
    ) -> impl std::future::Future<Output = Result<ChatMessage, RepositoryError>> + Send;

    /// All chat exchanges, sorted ascending by timestamp (oldest first).
    fn get_chat_messages(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Persist a contact submission with a fresh id and store-assigned
    /// timestamp.
    fn save_contact_message(
        &self,
        form: &ContactForm,
    ) -> impl std::future::Future<Output = Result<ContactMessage, RepositoryError>> + Send;

    /// All contact submissions, sorted descending by timestamp (newest
    /// first). Note the deliberate asymmetry with [`Storage::get_chat_messages`].
    fn get_contact_messages(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ContactMessage>, RepositoryError>> + Send;
}
