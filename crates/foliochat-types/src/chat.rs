//! Chat exchange types.
//!
//! A [`ChatMessage`] records one full request/reply exchange with the bot:
//! the user's message and the generated response, stamped at store-write
//! time. Records are immutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted request/reply exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    /// The user's message as received.
    pub message: String,
    /// The generated (or fallback) reply text.
    pub response: String,
    /// Assigned by the store at creation time, not supplied by the caller.
    pub timestamp: DateTime<Utc>,
}

/// Insert payload for a chat exchange. Id and timestamp are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatMessage {
    pub message: String,
    pub response: String,
}
