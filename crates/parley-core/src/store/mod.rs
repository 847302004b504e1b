//! SessionStore trait definition.
//!
//! The single authority over session and message state. Implementations
//! live in parley-infra (e.g. `MemorySessionStore`); a persistent backend
//! can slot in behind the same contract.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use parley_types::chat::{ChatMessage, ChatSession, SessionSummary};
use parley_types::error::StoreError;
use uuid::Uuid;

/// Storage contract for chat sessions and their message sequences.
///
/// Every operation must behave as one atomic unit with respect to the
/// others: concurrent calls never observe a session without its message
/// sequence, and concurrent appends to the same session never lose or
/// duplicate an entry. Implementations must not hold their internal lock
/// across externally-unbounded awaits.
pub trait SessionStore: Send + Sync {
    /// Snapshot of all known sessions, in a consistent order.
    fn list_sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSession>, StoreError>> + Send;

    /// Create a new session with an empty message sequence.
    fn create_session(
        &self,
    ) -> impl std::future::Future<Output = Result<ChatSession, StoreError>> + Send;

    /// Get a session by its unique ID.
    fn get_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<ChatSession, StoreError>> + Send;

    /// Get a session's messages in insertion order.
    fn list_messages(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, StoreError>> + Send;

    /// Append a message to the end of a session's sequence.
    fn append_message(
        &self,
        session_id: &Uuid,
        message: ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Delete a session and its messages as a single unit.
    ///
    /// Returns whether a session existed to delete. Deleting an absent
    /// session is not an error.
    fn delete_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;

    /// Compute a point-in-time summary of a session.
    fn summarize(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<SessionSummary, StoreError>> + Send;
}
