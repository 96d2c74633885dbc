//! Health and configuration status endpoints

use crate::state::SharedState;
use axum::{extract::State, Json};
use serde::Serialize;

#[allow(missing_docs)]
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

/// Which external services are usable
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StatusResponse {
    /// Contact form can store messages
    pub contact_configured: bool,
    /// Chat can reach the completion API
    pub chat_configured: bool,
    /// Model chat requests use
    pub model: String,
}

// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "IgniteHub backend is healthy".to_string(),
    })
}

// GET /api/status
pub async fn service_status(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        contact_configured: state.contact_store.is_configured(),
        chat_configured: state.completion.is_configured(),
        model: state.config.completion.model.clone(),
    })
}
