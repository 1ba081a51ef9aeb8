//! Shared domain types for Foliochat.
//!
//! This crate contains the core domain types used across the Foliochat
//! backend: users, chat exchanges, contact submissions, LLM request/response
//! shapes, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod contact;
pub mod error;
pub mod llm;
pub mod user;
