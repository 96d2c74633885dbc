//! Contact API
//!
//! Flow: configuration check -> validation -> one insert into the contact
//! table. Validation failures and missing configuration never reach the
//! database.

use crate::contact::{validate_submission, ContactSubmission};
use crate::contact::form::NOT_CONFIGURED_MESSAGE;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Message returned after a successful submission
pub const SUCCESS_MESSAGE: &str =
    "Message sent successfully! Thank you for reaching out. We'll get back to you soon!";

#[allow(missing_docs)]
#[derive(Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[allow(missing_docs)]
#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

// POST /api/contact
pub async fn submit_contact(
    State(state): State<SharedState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    if !state.contact_store.is_configured() {
        warn!("Contact submission rejected: database not configured");
        return Err(AppError::NotConfigured(NOT_CONFIGURED_MESSAGE.to_string()));
    }

    validate_submission(&request.name, &request.email, &request.message)?;

    let submission =
        ContactSubmission::from_fields(&request.name, &request.email, &request.message);

    state
        .contact_store
        .insert(state.contact_table(), std::slice::from_ref(&submission))
        .await?;

    info!(
        message_len = submission.message.chars().count(),
        "Contact submission stored"
    );

    Ok(Json(ContactResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
