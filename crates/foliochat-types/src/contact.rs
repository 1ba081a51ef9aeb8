//! Contact form submission types.
//!
//! [`ContactForm`] is the validated insert schema for the contact endpoint:
//! four required string fields. Shape validation is serde deserialization --
//! a payload missing any field fails to parse and is rejected before any
//! side effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact form submission. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Assigned by the store at creation time.
    pub timestamp: DateTime<Utc>,
}

/// Insert schema for a contact submission.
///
/// All fields are required; unknown fields are ignored (the frontend may
/// send extras).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
