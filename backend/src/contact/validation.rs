//! Contact form validation
//!
//! Rules run in a fixed order and the first failing rule wins, so the user
//! only ever sees one message at a time.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum message length in characters (after trimming)
pub const MIN_MESSAGE_LENGTH: usize = 10;
/// Maximum message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 2000;
/// Maximum name length in characters
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum email length in characters
pub const MAX_EMAIL_LENGTH: usize = 255;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A single failed validation rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty after trimming
    #[error("Name is required")]
    NameRequired,

    /// Email is empty after trimming
    #[error("Email is required")]
    EmailRequired,

    /// Email does not look like `local@domain.tld`
    #[error("Please enter a valid email address")]
    EmailInvalid,

    /// Message is empty after trimming
    #[error("Message is required")]
    MessageRequired,

    /// Message is shorter than [`MIN_MESSAGE_LENGTH`]
    #[error("Message must be at least {MIN_MESSAGE_LENGTH} characters long")]
    MessageTooShort,

    /// Name is longer than [`MAX_NAME_LENGTH`]
    #[error("Name must be at most {MAX_NAME_LENGTH} characters")]
    NameTooLong,

    /// Email is longer than [`MAX_EMAIL_LENGTH`]
    #[error("Email must be at most {MAX_EMAIL_LENGTH} characters")]
    EmailTooLong,

    /// Message is longer than [`MAX_MESSAGE_LENGTH`]
    #[error("Message must be at most {MAX_MESSAGE_LENGTH} characters")]
    MessageTooLong,
}

/// Check whether `email` matches the loose `local@domain.tld` pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate raw form fields
///
/// # Arguments
/// * `name` - Name field as typed
/// * `email` - Email field as typed (the pattern is checked on the raw value)
/// * `message` - Message field as typed
///
/// # Returns
/// * `Ok(())` - All rules pass
/// * `Err(ValidationError)` - The first rule that failed
pub fn validate_submission(name: &str, email: &str, message: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    let message_trimmed = message.trim();

    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if message_trimmed.is_empty() {
        return Err(ValidationError::MessageRequired);
    }

    let message_len = message_trimmed.chars().count();
    if message_len < MIN_MESSAGE_LENGTH {
        return Err(ValidationError::MessageTooShort);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    if email.trim().chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong);
    }
    if message_len > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::MessageTooLong);
    }

    Ok(())
}
