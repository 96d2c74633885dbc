//! API module
//!
//! Contains HTTP request handlers for the contact form and IdeaForge++ chat

pub mod chat;
pub mod contact;
pub mod health;

use crate::state::SharedState;
use axum::{
    routing::{get, post},
    Router,
};

/// Build the API routes
///
/// Middleware (tracing, CORS, request ids) is added by the binary.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/status", get(health::service_status))
        // Contact form
        .route("/api/contact", post(contact::submit_contact))
        // IdeaForge++ chat
        .route("/api/chat/sessions", post(chat::create_session))
        .route(
            "/api/chat/sessions/:id",
            get(chat::get_session).delete(chat::delete_session),
        )
        .route("/api/chat/sessions/:id/messages", post(chat::send_message))
        .route("/api/chat/quick-prompts", get(chat::quick_prompts))
        .with_state(state)
}
