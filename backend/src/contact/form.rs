//! Contact form state
//!
//! Holds the controlled inputs, the in-flight flag and the status banner for
//! the contact page. The submit flow is available both as a single async call
//! ([`ContactForm::submit`]) and split around its await point
//! ([`ContactForm::begin_submit`] / [`ContactForm::finish_submit`]) for
//! event-loop front ends that run the insert on a background task.

use crate::config::BANNER_DURATION;
use crate::contact::models::{ContactField, ContactSubmission, SubmitStatus};
use crate::contact::store::{ContactStore, StoreError};
use crate::contact::validation::validate_submission;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Shown when the hosted database has no configuration
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Contact form is not properly configured. Please check your Supabase settings.";

/// Used when a failed insert carries no usable error text
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Shown in the error banner when no specific message is set
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Table contact rows go into unless configured otherwise
pub const DEFAULT_CONTACT_TABLE: &str = "contacts";

/// Contact page state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    /// Name input
    pub name: String,
    /// Email input
    pub email: String,
    /// Message textarea
    pub message: String,
    is_submitting: bool,
    status: SubmitStatus,
    error_message: String,
    status_since: Option<Instant>,
}

impl ContactForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a single field (controlled input)
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Whether an insert is in flight
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Current banner status
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Raw error message (may be empty)
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Error text for the banner, falling back to a generic message
    pub fn display_error(&self) -> &str {
        if self.error_message.is_empty() {
            GENERIC_ERROR_MESSAGE
        } else {
            &self.error_message
        }
    }

    /// When the current non-idle status was set
    pub fn status_since(&self) -> Option<Instant> {
        self.status_since
    }

    /// Inputs are editable only when the store is usable and nothing is in flight
    pub fn inputs_enabled(&self, store_configured: bool) -> bool {
        store_configured && !self.is_submitting
    }

    /// Message length in characters, for the `n/2000` counter
    pub fn message_char_count(&self) -> usize {
        self.message.chars().count()
    }

    /// Start a submission
    ///
    /// Resets the banner, then checks configuration and validation. On success
    /// marks the form as submitting and returns the trimmed submission that
    /// should be inserted; otherwise the error banner is set and `None` is
    /// returned without any network call being due.
    pub fn begin_submit(&mut self, store_configured: bool) -> Option<ContactSubmission> {
        if self.is_submitting {
            return None;
        }

        self.reset_status();

        if !store_configured {
            self.set_error(NOT_CONFIGURED_MESSAGE.to_string(), Instant::now());
            return None;
        }

        if let Err(e) = validate_submission(&self.name, &self.email, &self.message) {
            self.set_error(e.to_string(), Instant::now());
            return None;
        }

        self.is_submitting = true;
        Some(ContactSubmission::from_fields(
            &self.name,
            &self.email,
            &self.message,
        ))
    }

    /// Apply the outcome of the insert started by [`ContactForm::begin_submit`]
    pub fn finish_submit(&mut self, result: Result<(), StoreError>) -> SubmitStatus {
        self.is_submitting = false;

        match result {
            Ok(()) => {
                info!("Contact submission stored");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.set_status(SubmitStatus::Success, String::new(), Instant::now());
            }
            Err(e) => {
                error!(error = %e, "Contact submission failed");
                self.set_error(failure_message(&e), Instant::now());
            }
        }

        self.status
    }

    /// Run the whole submit flow against `store`
    ///
    /// Makes at most one `insert` call, and none when the store is
    /// unconfigured or validation fails.
    pub async fn submit(&mut self, store: &dyn ContactStore, table: &str) -> SubmitStatus {
        let Some(submission) = self.begin_submit(store.is_configured()) else {
            return self.status;
        };

        let result = store.insert(table, std::slice::from_ref(&submission)).await;
        self.finish_submit(result)
    }

    /// Revert a success/error banner to idle once it has been up for 7 seconds
    ///
    /// Returns true if the banner was cleared.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        match self.status_remaining(now) {
            Some(remaining) if remaining.is_zero() => {
                self.reset_status();
                true
            }
            _ => false,
        }
    }

    /// Time left before the current banner clears, if one is showing
    pub fn status_remaining(&self, now: Instant) -> Option<Duration> {
        if self.status == SubmitStatus::Idle {
            return None;
        }
        let since = self.status_since?;
        Some(BANNER_DURATION.saturating_sub(now.saturating_duration_since(since)))
    }

    fn reset_status(&mut self) {
        self.status = SubmitStatus::Idle;
        self.error_message.clear();
        self.status_since = None;
    }

    fn set_error(&mut self, message: String, now: Instant) {
        self.set_status(SubmitStatus::Error, message, now);
    }

    fn set_status(&mut self, status: SubmitStatus, message: String, now: Instant) {
        self.status = status;
        self.error_message = message;
        self.status_since = Some(now);
    }
}

// A blank backend detail would render as a bare "Database error: "
fn failure_message(error: &StoreError) -> String {
    match error {
        StoreError::Backend(detail) | StoreError::Transport(detail) if detail.trim().is_empty() => {
            SUBMIT_FAILED_MESSAGE.to_string()
        }
        other => other.to_string(),
    }
}
