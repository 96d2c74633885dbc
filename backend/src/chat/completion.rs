//! OpenAI completion client
//!
//! Direct HTTP client for the chat completion endpoint. Each call sends the
//! fixed system instruction plus one user prompt and returns the text of the
//! first choice.

use crate::chat::completion_types::{
    ApiErrorResponse, CompletionRequest, CompletionResponse, RequestMessage,
};
use crate::config::CompletionConfig;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a completion call
///
/// `Http` display strings carry the status code and the API's error code so
/// the chat flow can classify them. Other variants keep the reqwest/serde text
/// for logs only.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// No credential configured; no request was sent
    #[error("OpenAI API key is not configured")]
    MissingApiKey,

    /// API answered with a non-success status
    #[error("OpenAI API error ({status}): {detail}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Error code or type reported by the API
        detail: String,
    },

    /// Request could not be sent or the body could not be read
    #[error("Failed to send HTTP request to OpenAI: {0}")]
    Transport(String),

    /// Body was not the expected JSON
    #[error("Failed to parse JSON response from OpenAI: {0}")]
    InvalidResponse(String),

    /// Response had no text in `choices[0].message.content`
    #[error("OpenAI response contains no text")]
    EmptyResponse,
}

/// Something that turns a system instruction and prompt into reply text
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Whether a credential is present
    fn is_configured(&self) -> bool;

    /// Generate a reply for `prompt` under the `system` instruction
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError>;
}

/// Client for OpenAI-compatible chat completion APIs
pub struct OpenAiClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    /// Create a client with a shared HTTP client (connection pooling)
    pub fn new(client: reqwest::Client, config: CompletionConfig) -> Self {
        Self { client, config }
    }

    /// Model requests are sent with
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else {
            format!("{}/chat/completions", base)
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn is_configured(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
        if !self.is_configured() {
            return Err(CompletionError::MissingApiKey);
        }

        let url = self.endpoint();
        let request_body = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: system.to_string(),
                },
                RequestMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Calling completion API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Completion request failed to send");
                CompletionError::Transport(e.to_string())
            })?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to read completion response body");
                CompletionError::Transport(e.to_string())
            })?;

        if !status.is_success() {
            let status_code = status.as_u16();
            tracing::error!(
                status_code = status_code,
                error_body = %response_body,
                "Completion API returned error status"
            );

            // Only the code/type go into the error; the free-text message can
            // echo parts of the key.
            let detail = serde_json::from_str::<ApiErrorResponse>(&response_body)
                .ok()
                .and_then(|parsed| parsed.error.code.or(parsed.error.error_type))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });

            return Err(CompletionError::Http {
                status: status_code,
                detail,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&response_body).map_err(|e| {
            tracing::warn!(error = %e, body_len = response_body.len(), "Malformed completion response");
            CompletionError::InvalidResponse(e.to_string())
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?;

        let text = choice
            .message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or(CompletionError::EmptyResponse)?;

        tracing::debug!(
            response_len = text.len(),
            finish_reason = ?choice.finish_reason,
            "Received completion"
        );

        Ok(text)
    }
}
