//! Application state wiring the store and reply generator together.
//!
//! AppState holds the concrete service instance used by the REST API
//! handlers. The service is generic over the store trait, but AppState pins
//! it to the in-memory infra implementation; the generator stays
//! type-erased so the backend is chosen at startup (or replaced in tests).

use std::sync::Arc;

use parley_core::chat::ChatService;
use parley_core::reply::BoxReplyGenerator;
use parley_infra::memory::MemorySessionStore;
use parley_infra::openai::{OpenAiReplyConfig, OpenAiReplyGenerator};

/// Concrete type alias for the service generics pinned to the infra
/// implementation.
pub type ConcreteChatService = ChatService<MemorySessionStore>;

/// Shared application state holding the chat service.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Wire a fresh in-memory store to the given reply generator.
    pub fn new(generator: BoxReplyGenerator) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(MemorySessionStore::new(), generator)),
        }
    }

    /// Initialize state with an OpenAI-compatible reply backend.
    pub fn init(config: OpenAiReplyConfig) -> Self {
        Self::new(BoxReplyGenerator::new(OpenAiReplyGenerator::new(config)))
    }
}
