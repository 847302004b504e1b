//! Chat service orchestrating one user-turn-to-assistant-turn cycle.
//!
//! ChatService coordinates between the SessionStore and the reply
//! generator. It owns no conversation state: the store is the sole source
//! of truth, and the generator is invoked outside any store lock so a slow
//! reply never blocks other sessions' operations.

use parley_types::chat::{ChatMessage, ChatSession, SessionSummary};
use parley_types::error::{ChatError, StoreError};
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::transcript;
use crate::reply::BoxReplyGenerator;
use crate::store::SessionStore;

/// Orchestrates session lifecycle and the submit-message workflow.
///
/// Generic over `SessionStore` to maintain clean architecture
/// (parley-core never depends on parley-infra). The reply generator is
/// type-erased to allow runtime backend selection.
pub struct ChatService<S: SessionStore> {
    store: S,
    generator: BoxReplyGenerator,
}

impl<S: SessionStore> ChatService<S> {
    /// Create a new chat service with the given store and reply generator.
    pub fn new(store: S, generator: BoxReplyGenerator) -> Self {
        Self { store, generator }
    }

    /// Access the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Session lifecycle ---

    /// List all known sessions.
    pub async fn list_sessions(&self) -> Result<Vec<ChatSession>, StoreError> {
        self.store.list_sessions().await
    }

    /// Create a new empty session.
    pub async fn create_session(&self) -> Result<ChatSession, StoreError> {
        let session = self.store.create_session().await?;
        info!(session_id = %session.id, "Session created");
        Ok(session)
    }

    /// Get a session by ID.
    pub async fn get_session(&self, session_id: &Uuid) -> Result<ChatSession, StoreError> {
        self.store.get_session(session_id).await
    }

    /// Get a session's messages in conversation order.
    pub async fn list_messages(&self, session_id: &Uuid) -> Result<Vec<ChatMessage>, StoreError> {
        self.store.list_messages(session_id).await
    }

    /// Delete a session and its messages. Returns whether it existed.
    pub async fn delete_session(&self, session_id: &Uuid) -> Result<bool, StoreError> {
        let deleted = self.store.delete_session(session_id).await?;
        if deleted {
            info!(session_id = %session_id, "Session deleted");
        }
        Ok(deleted)
    }

    /// Compute a point-in-time summary of a session.
    pub async fn summarize(&self, session_id: &Uuid) -> Result<SessionSummary, StoreError> {
        self.store.summarize(session_id).await
    }

    // --- Message submission ---

    /// Submit a user message and return the generated assistant reply.
    ///
    /// Appends the user message, renders the full transcript (including the
    /// just-appended message), invokes the reply generator, then appends
    /// and returns the assistant message.
    ///
    /// The two appends are not transactional: if reply generation fails or
    /// the caller abandons the request, the user message stays persisted
    /// with no rollback.
    pub async fn submit_user_message(
        &self,
        session_id: Uuid,
        content: String,
    ) -> Result<ChatMessage, ChatError> {
        if content.trim().is_empty() {
            return Err(ChatError::EmptyContent);
        }

        let user_message = ChatMessage::user(session_id, content.clone());
        self.store.append_message(&session_id, user_message).await?;

        let messages = self.store.list_messages(&session_id).await?;
        let transcript = transcript::render(&messages);

        // The generator may suspend for a network round trip; no store lock
        // is held here.
        let reply = match self.generator.generate_reply(&transcript, &content).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Reply generation failed");
                return Err(e.into());
            }
        };

        let assistant_message = ChatMessage::assistant(session_id, reply);
        self.store
            .append_message(&session_id, assistant_message.clone())
            .await?;

        info!(session_id = %session_id, "Assistant reply appended");
        Ok(assistant_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::chat::MessageRole;
    use parley_types::error::ReplyError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use crate::reply::ReplyGenerator;

    /// Minimal in-memory store fixture (the production implementation
    /// lives in parley-infra).
    #[derive(Default)]
    struct FixtureStore {
        entries: Mutex<HashMap<Uuid, (ChatSession, Vec<ChatMessage>)>>,
    }

    impl SessionStore for FixtureStore {
        async fn list_sessions(&self) -> Result<Vec<ChatSession>, StoreError> {
            let entries = self.entries.lock().await;
            Ok(entries.values().map(|(s, _)| s.clone()).collect())
        }

        async fn create_session(&self) -> Result<ChatSession, StoreError> {
            let session = ChatSession::new();
            let mut entries = self.entries.lock().await;
            entries.insert(session.id, (session.clone(), Vec::new()));
            Ok(session)
        }

        async fn get_session(&self, session_id: &Uuid) -> Result<ChatSession, StoreError> {
            let entries = self.entries.lock().await;
            entries
                .get(session_id)
                .map(|(s, _)| s.clone())
                .ok_or(StoreError::SessionNotFound)
        }

        async fn list_messages(&self, session_id: &Uuid) -> Result<Vec<ChatMessage>, StoreError> {
            let entries = self.entries.lock().await;
            entries
                .get(session_id)
                .map(|(_, m)| m.clone())
                .ok_or(StoreError::SessionNotFound)
        }

        async fn append_message(
            &self,
            session_id: &Uuid,
            message: ChatMessage,
        ) -> Result<(), StoreError> {
            let mut entries = self.entries.lock().await;
            let (_, messages) = entries
                .get_mut(session_id)
                .ok_or(StoreError::SessionNotFound)?;
            messages.push(message);
            Ok(())
        }

        async fn delete_session(&self, session_id: &Uuid) -> Result<bool, StoreError> {
            let mut entries = self.entries.lock().await;
            Ok(entries.remove(session_id).is_some())
        }

        async fn summarize(&self, session_id: &Uuid) -> Result<SessionSummary, StoreError> {
            let entries = self.entries.lock().await;
            let (_, messages) = entries
                .get(session_id)
                .ok_or(StoreError::SessionNotFound)?;
            let user: Vec<&str> = messages
                .iter()
                .filter(|m| m.role == MessageRole::User)
                .map(|m| m.content.as_str())
                .collect();
            Ok(SessionSummary {
                session_id: *session_id,
                total_messages: messages.len() as u32,
                user_messages: user.len() as u32,
                assistant_messages: (messages.len() - user.len()) as u32,
                summary: user[..user.len().min(3)].join(" | "),
            })
        }
    }

    /// Echoes the latest message back with a prefix.
    struct EchoGenerator;

    impl ReplyGenerator for EchoGenerator {
        async fn generate_reply(
            &self,
            _transcript: &str,
            latest_message: &str,
        ) -> Result<String, ReplyError> {
            Ok(format!("echo: {latest_message}"))
        }
    }

    /// Captures the transcript it was called with.
    struct CapturingGenerator {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl ReplyGenerator for CapturingGenerator {
        async fn generate_reply(
            &self,
            transcript: &str,
            _latest_message: &str,
        ) -> Result<String, ReplyError> {
            self.seen.lock().await.push(transcript.to_string());
            Ok("ok".to_string())
        }
    }

    struct FailingGenerator;

    impl ReplyGenerator for FailingGenerator {
        async fn generate_reply(
            &self,
            _transcript: &str,
            _latest_message: &str,
        ) -> Result<String, ReplyError> {
            Err(ReplyError::Provider {
                message: "upstream timeout".to_string(),
            })
        }
    }

    fn echo_service() -> ChatService<FixtureStore> {
        ChatService::new(FixtureStore::default(), BoxReplyGenerator::new(EchoGenerator))
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_assistant() {
        let service = echo_service();
        let session = service.create_session().await.unwrap();

        let reply = service
            .submit_user_message(session.id, "2+2?".to_string())
            .await
            .unwrap();
        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(reply.content, "echo: 2+2?");

        let messages = service.list_messages(&session.id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].content, "2+2?");
        assert_eq!(messages[1].id, reply.id);

        let summary = service.summarize(&session.id).await.unwrap();
        assert_eq!(summary.total_messages, 2);
        assert_eq!(summary.user_messages, 1);
        assert_eq!(summary.assistant_messages, 1);
    }

    #[tokio::test]
    async fn test_empty_content_rejected_without_append() {
        let service = echo_service();
        let session = service.create_session().await.unwrap();

        for content in ["", "   ", "\n\t"] {
            let err = service
                .submit_user_message(session.id, content.to_string())
                .await
                .unwrap_err();
            assert!(matches!(err, ChatError::EmptyContent));
        }

        let messages = service.list_messages(&session.id).await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_submit_to_missing_session() {
        let service = echo_service();
        let err = service
            .submit_user_message(Uuid::now_v7(), "hello".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Store(StoreError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_transcript_includes_just_appended_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let service = ChatService::new(
            FixtureStore::default(),
            BoxReplyGenerator::new(CapturingGenerator { seen: seen.clone() }),
        );
        let session = service.create_session().await.unwrap();

        service
            .submit_user_message(session.id, "first".to_string())
            .await
            .unwrap();
        service
            .submit_user_message(session.id, "second".to_string())
            .await
            .unwrap();

        let seen = seen.lock().await;
        assert_eq!(seen[0], "User: first");
        assert_eq!(seen[1], "User: first\nAssistant: ok\nUser: second");
    }

    #[tokio::test]
    async fn test_generator_failure_leaves_user_message() {
        let service = ChatService::new(
            FixtureStore::default(),
            BoxReplyGenerator::new(FailingGenerator),
        );
        let session = service.create_session().await.unwrap();

        let err = service
            .submit_user_message(session.id, "hello?".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Reply(_)));

        // The two appends are not transactional: the user message stays.
        let messages = service.list_messages(&session.id).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::User);
    }

    #[tokio::test]
    async fn test_concurrent_submits_yield_two_k_messages() {
        const K: usize = 16;

        let service = Arc::new(echo_service());
        let session = service.create_session().await.unwrap();

        let mut handles = Vec::new();
        for i in 0..K {
            let service = Arc::clone(&service);
            let session_id = session.id;
            handles.push(tokio::spawn(async move {
                service
                    .submit_user_message(session_id, format!("message {i}"))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let messages = service.list_messages(&session.id).await.unwrap();
        assert_eq!(messages.len(), 2 * K);

        let summary = service.summarize(&session.id).await.unwrap();
        assert_eq!(summary.user_messages, K as u32);
        assert_eq!(summary.assistant_messages, K as u32);
    }

    #[tokio::test]
    async fn test_get_session_roundtrip() {
        let service = echo_service();
        let session = service.create_session().await.unwrap();

        let fetched = service.get_session(&session.id).await.unwrap();
        assert_eq!(fetched.id, session.id);
        assert_eq!(fetched.created_at, session.created_at);

        assert!(matches!(
            service.get_session(&Uuid::now_v7()).await,
            Err(StoreError::SessionNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_session_reports_existence() {
        let service = echo_service();
        let session = service.create_session().await.unwrap();

        assert!(service.delete_session(&session.id).await.unwrap());
        assert!(!service.delete_session(&session.id).await.unwrap());
        assert!(!service.delete_session(&Uuid::now_v7()).await.unwrap());
    }
}
