//! In-memory SessionStore implementation.
//!
//! The production store: volatile, process-local, serialized through one
//! async mutex. Sessions and their message sequences live in a single
//! compound map, so a session id exists together with its sequence or not
//! at all -- there is no second mapping to drift out of sync.

use std::collections::HashMap;

use parley_core::store::SessionStore;
use parley_types::chat::{ChatMessage, ChatSession, MessageRole, SessionSummary};
use parley_types::error::StoreError;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// How many leading user messages feed the text summary.
const SUMMARY_USER_MESSAGES: usize = 3;

/// A session together with its owned message sequence.
struct SessionEntry {
    session: ChatSession,
    messages: Vec<ChatMessage>,
}

/// In-memory implementation of `SessionStore`.
///
/// Every operation takes the single store lock for its whole duration, so
/// concurrent calls serialize: no lost appends, no session observed
/// without its message sequence. The lock is never held across an await on
/// external work (reply generation happens in the orchestrator, outside
/// the store).
pub struct MemorySessionStore {
    entries: Mutex<HashMap<Uuid, SessionEntry>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    async fn list_sessions(&self) -> Result<Vec<ChatSession>, StoreError> {
        let entries = self.entries.lock().await;
        let mut sessions: Vec<ChatSession> =
            entries.values().map(|e| e.session.clone()).collect();
        // HashMap iteration order is arbitrary; present creation order.
        sessions.sort_by_key(|s| (s.created_at, s.id));
        Ok(sessions)
    }

    async fn create_session(&self) -> Result<ChatSession, StoreError> {
        let session = ChatSession::new();
        let mut entries = self.entries.lock().await;
        entries.insert(
            session.id,
            SessionEntry {
                session: session.clone(),
                messages: Vec::new(),
            },
        );
        debug!(session_id = %session.id, "Session registered");
        Ok(session)
    }

    async fn get_session(&self, session_id: &Uuid) -> Result<ChatSession, StoreError> {
        let entries = self.entries.lock().await;
        entries
            .get(session_id)
            .map(|e| e.session.clone())
            .ok_or(StoreError::SessionNotFound)
    }

    async fn list_messages(&self, session_id: &Uuid) -> Result<Vec<ChatMessage>, StoreError> {
        let entries = self.entries.lock().await;
        entries
            .get(session_id)
            .map(|e| e.messages.clone())
            .ok_or(StoreError::SessionNotFound)
    }

    async fn append_message(
        &self,
        session_id: &Uuid,
        message: ChatMessage,
    ) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        let entry = entries
            .get_mut(session_id)
            .ok_or(StoreError::SessionNotFound)?;
        entry.messages.push(message);
        Ok(())
    }

    async fn delete_session(&self, session_id: &Uuid) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock().await;
        let removed = entries.remove(session_id).is_some();
        if removed {
            debug!(session_id = %session_id, "Session removed");
        }
        Ok(removed)
    }

    async fn summarize(&self, session_id: &Uuid) -> Result<SessionSummary, StoreError> {
        let entries = self.entries.lock().await;
        let entry = entries
            .get(session_id)
            .ok_or(StoreError::SessionNotFound)?;

        let user_contents: Vec<&str> = entry
            .messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .collect();
        let user_count = user_contents.len();
        let head = &user_contents[..user_count.min(SUMMARY_USER_MESSAGES)];

        Ok(SessionSummary {
            session_id: *session_id,
            total_messages: entry.messages.len() as u32,
            user_messages: user_count as u32,
            assistant_messages: (entry.messages.len() - user_count) as u32,
            summary: head.join(" | "),
        })
    }
}
