//! Conversation orchestration: transcript rendering and the chat service.

pub mod service;
pub mod transcript;

pub use service::ChatService;
