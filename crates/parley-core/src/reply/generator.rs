//! ReplyGenerator trait definition.
//!
//! The external collaborator that turns a conversation into an assistant
//! reply. Opaque to the core's concurrency and error model: it may be slow,
//! and any failure propagates unchanged to the orchestrator's caller.

use parley_types::error::ReplyError;

/// Trait for AI reply backends (OpenAI-compatible APIs, test doubles, etc.).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in parley-infra (e.g., `OpenAiReplyGenerator`).
pub trait ReplyGenerator: Send + Sync {
    /// Generate a reply from the rendered conversation transcript and the
    /// latest user message.
    ///
    /// Both parameters are supplied separately: `transcript` already
    /// includes the latest message as its final line, and `latest_message`
    /// repeats it per the collaborator contract.
    fn generate_reply(
        &self,
        transcript: &str,
        latest_message: &str,
    ) -> impl std::future::Future<Output = Result<String, ReplyError>> + Send;
}
