//! Contact data models

use serde::{Deserialize, Serialize};

/// A validated contact form submission
///
/// Field values are always trimmed. Serializes to the row shape stored in the
/// `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender's name
    pub name: String,
    /// Sender's email address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from raw form fields, trimming each one
    pub fn from_fields(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}

/// Form field identifier for controlled input updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Name input
    Name,
    /// Email input
    Email,
    /// Message textarea
    Message,
}

/// Status shown in the form's banner area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    /// Nothing to show
    #[default]
    Idle,
    /// Last submission was stored
    Success,
    /// Last submission was rejected or failed
    Error,
}
