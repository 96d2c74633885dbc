//! User-facing assistant replies for failure cases
//!
//! Errors from the completion API are classified by looking for known
//! fragments in their text. Only HTTP errors are matched this way; their text
//! is the status code plus the error code reported by the API. Transport and
//! parse errors carry free text from reqwest/serde and always get the generic
//! reply.

use crate::chat::completion::CompletionError;

/// Reply when no completion credential is configured
pub const NOT_CONFIGURED_REPLY: &str = "🤖 I'd love to help you with that! However, I need an OpenAI API key \
to provide intelligent responses. Once configured, I can help you with:\n\n\
• 💡 Project idea generation\n\
• 🔧 Technical problem solving\n\
• 🚀 Hackathon project suggestions\n\
• 📚 Learning path recommendations\n\
• 🎯 Feature implementation ideas\n\n\
Please ask the developer to configure the OpenAI API key to unlock my full potential!";

/// Reply when the request failed because the key is missing
pub const MISSING_KEY_REPLY: &str =
    "🔑 The OpenAI API key is missing. Please ask the developer to configure it and try again.";

/// Reply when the API rejected the key
pub const INVALID_KEY_REPLY: &str =
    "🔑 The OpenAI API key was rejected (401). Please check that the key is valid.";

/// Reply when the API is rate limiting
pub const RATE_LIMIT_REPLY: &str =
    "⏳ I'm getting too many requests right now (429). Please wait a moment and try again.";

/// Reply when the account has run out of quota
pub const QUOTA_REPLY: &str =
    "💳 The OpenAI API quota has been exceeded. Please check the account's plan and billing details.";

/// Reply for anything else
pub const GENERIC_ERROR_REPLY: &str = "⚠️ Oops! Something went wrong. Please try again in a moment.";

/// Pick the reply for a failed completion
pub fn reply_for(error: &CompletionError) -> &'static str {
    match error {
        CompletionError::MissingApiKey => MISSING_KEY_REPLY,
        CompletionError::Http { .. } => reply_for_error(&error.to_string()),
        CompletionError::Transport(_)
        | CompletionError::InvalidResponse(_)
        | CompletionError::EmptyResponse => GENERIC_ERROR_REPLY,
    }
}

/// Pick the reply for a failed completion from its error text
///
/// Checks run in order: missing key, 401, quota, 429. The first match wins.
/// Quota comes before 429 because exhausted quota is also reported as a 429.
pub fn reply_for_error(error_text: &str) -> &'static str {
    if error_text.contains("API key") {
        MISSING_KEY_REPLY
    } else if error_text.contains("401") {
        INVALID_KEY_REPLY
    } else if error_text.contains("quota") {
        QUOTA_REPLY
    } else if error_text.contains("429") {
        RATE_LIMIT_REPLY
    } else {
        GENERIC_ERROR_REPLY
    }
}
