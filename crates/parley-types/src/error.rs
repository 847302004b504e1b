use thiserror::Error;

/// Errors from session store operations (used by trait definitions in
/// parley-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session not found")]
    SessionNotFound,

    /// Backend failure for non-volatile implementations. The in-memory
    /// store never produces this variant.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors from the reply generator (the external AI collaborator).
///
/// These are propagated opaquely: the core neither retries nor rolls back
/// the already-appended user message on failure.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Errors surfaced by the conversation orchestrator.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message content cannot be empty")]
    EmptyContent,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("reply generation failed: {0}")]
    Reply(#[from] ReplyError),
}
