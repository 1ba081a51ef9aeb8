//! Contact submission flow.

pub mod service;

pub use service::ContactService;
