//! Contact module
//!
//! Contact form validation, state and the hosted database client.

pub mod form;
pub mod models;
pub mod store;
pub mod validation;

pub use form::{ContactForm, DEFAULT_CONTACT_TABLE};
pub use models::{ContactField, ContactSubmission, SubmitStatus};
pub use store::{ContactStore, StoreError, SupabaseStore};
pub use validation::{validate_submission, ValidationError};
