//! Infrastructure implementations for Foliochat.
//!
//! Concrete backends for the traits defined in foliochat-core: the
//! in-memory record store and the OpenAI completion provider, plus
//! environment-based configuration.

pub mod config;
pub mod llm;
pub mod store;
