//! Business logic for the Foliochat backend.
//!
//! Defines the repository and completion-provider traits plus the services
//! that orchestrate them. Implementations live in foliochat-infra; this
//! crate never depends on infrastructure.

pub mod chat;
pub mod contact;
pub mod llm;
pub mod repository;
