//! User account types.
//!
//! Users exist for completeness of the store contract; no HTTP handler
//! exercises them yet.

use serde::{Deserialize, Serialize};

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Opaque credential string. Stored as-is; no hashing is in scope.
    pub password: String,
}

/// Insert payload for creating a user.
///
/// The store does NOT enforce username uniqueness on create, even though a
/// by-username lookup exists. Callers are expected to keep usernames unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
