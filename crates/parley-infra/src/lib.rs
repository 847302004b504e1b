//! Infrastructure implementations for Parley.
//!
//! Concrete fulfillers of the parley-core contracts:
//!
//! - [`memory::MemorySessionStore`] -- the production in-memory
//!   `SessionStore` (volatile, process-local).
//! - [`openai::OpenAiReplyGenerator`] -- `ReplyGenerator` backed by any
//!   OpenAI-compatible chat completions API.

pub mod memory;
pub mod openai;
