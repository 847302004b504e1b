//! Core abstractions and orchestration for Parley.
//!
//! This crate defines the seams of the system and the logic between them:
//!
//! - [`store::SessionStore`] -- the storage contract owning all session and
//!   message state. Implementations live in parley-infra (e.g.
//!   `MemorySessionStore`).
//! - [`reply::ReplyGenerator`] -- the external AI collaborator contract,
//!   with [`reply::BoxReplyGenerator`] for runtime provider selection.
//! - [`chat::ChatService`] -- the conversation orchestrator sequencing the
//!   user-turn-to-assistant-turn cycle. It holds no state of its own.
//!
//! parley-core never depends on parley-infra.

pub mod chat;
pub mod reply;
pub mod store;
