//! OpenAI chat-completions provider.

mod client;
mod types;

pub use client::OpenAiProvider;
