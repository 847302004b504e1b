//! Chat session and message HTTP handlers.
//!
//! Endpoints:
//! - GET    /chats               - List all chat sessions
//! - POST   /chats               - Create a new chat session
//! - GET    /chats/{id}/messages - List messages in a session
//! - POST   /chats/{id}/messages - Submit a user message, get the reply
//! - DELETE /chats/{id}          - Delete a session and its messages
//! - GET    /chats/{id}/summary  - Summarize a session

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use parley_types::chat::{ChatMessage, ChatSession, SessionSummary};
use parley_types::error::StoreError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for submitting a user message.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
}

/// GET /chats - List all chat sessions.
pub async fn list_chats(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatSession>>, AppError> {
    let sessions = state.chat_service.list_sessions().await?;
    Ok(Json(sessions))
}

/// POST /chats - Create a new chat session.
pub async fn create_chat(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ChatSession>), AppError> {
    let session = state.chat_service.create_session().await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /chats/{id}/messages - List a session's messages in conversation
/// order.
pub async fn get_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let messages = state.chat_service.list_messages(&chat_id).await?;
    Ok(Json(messages))
}

/// POST /chats/{id}/messages - Submit a user message and return the
/// assistant's reply.
pub async fn add_message(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), AppError> {
    let reply = state
        .chat_service
        .submit_user_message(chat_id, body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(reply)))
}

/// DELETE /chats/{id} - Delete a session and its messages.
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.chat_service.delete_session(&chat_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StoreError::SessionNotFound.into())
    }
}

/// GET /chats/{id}/summary - Point-in-time summary of a session.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, AppError> {
    let summary = state.chat_service.summarize(&chat_id).await?;
    Ok(Json(summary))
}
