//! Chat exchange flow: persona prompt and orchestration service.

pub mod prompt;
pub mod service;

pub use service::ChatService;
