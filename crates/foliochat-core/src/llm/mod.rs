//! Completion provider abstraction.

pub mod box_provider;
pub mod provider;

pub use box_provider::BoxCompletionProvider;
pub use provider::CompletionProvider;
