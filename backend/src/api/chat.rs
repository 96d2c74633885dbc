//! Chat API
//!
//! Provides IdeaForge++ chat sessions over HTTP.
//! Flow: user message -> session (busy) -> completion API -> assistant turn
//!
//! The registry lock is not held across the completion call. The session is
//! marked busy first, so a second send to the same session gets 409 instead
//! of interleaving turns.

use crate::chat::{ChatMessage, ChatSession, QuickPrompt, SendStep, QUICK_PROMPTS, SYSTEM_PROMPT};
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

#[allow(missing_docs)]
#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[allow(missing_docs)]
#[derive(Serialize)]
pub struct SendMessageResponse {
    pub session_id: Uuid,
    /// The assistant turn appended for this message
    pub reply: ChatMessage,
    pub message_count: usize,
}

fn not_found(id: &Uuid) -> AppError {
    AppError::SessionNotFound(id.to_string())
}

// POST /api/chat/sessions
pub async fn create_session(
    State(state): State<SharedState>,
) -> (StatusCode, Json<ChatSession>) {
    let session = state.sessions.write().await.create();
    info!(session_id = %session.id(), "Chat session created");
    (StatusCode::CREATED, Json(session))
}

// GET /api/chat/sessions/:id
pub async fn get_session(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSession>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(Json(session.clone()))
}

// DELETE /api/chat/sessions/:id
pub async fn delete_session(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .write()
        .await
        .remove(&id)
        .ok_or_else(|| not_found(&id))?;
    info!(session_id = %id, "Chat session deleted");
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/chat/sessions/:id/messages
pub async fn send_message(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Message cannot be empty".to_string(),
        ));
    }

    let prompt = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(&id))?;
        if session.is_busy() {
            return Err(AppError::SessionBusy(id.to_string()));
        }
        session.set_input(request.message);
        match session.begin_send(state.completion.is_configured()) {
            SendStep::Pending(prompt) => prompt,
            // Canned reply was appended inline
            _ => return reply_snapshot(id, session),
        }
    };

    debug!(session_id = %id, prompt_len = prompt.len(), "Requesting completion");
    let result = state.completion.complete(SYSTEM_PROMPT, &prompt).await;

    // The session may have been deleted while waiting
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| not_found(&id))?;
    session.finish_send(result);
    reply_snapshot(id, session)
}

/// Build the response while the caller still holds the write lock, so the
/// reply is the one appended for this request
fn reply_snapshot(id: Uuid, session: &ChatSession) -> Result<Json<SendMessageResponse>, AppError> {
    let reply = session
        .last_reply()
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Session has no assistant reply")))?;

    Ok(Json(SendMessageResponse {
        session_id: id,
        reply,
        message_count: session.messages().len(),
    }))
}

// GET /api/chat/quick-prompts
pub async fn quick_prompts() -> Json<Vec<QuickPrompt>> {
    Json(QUICK_PROMPTS.to_vec())
}
