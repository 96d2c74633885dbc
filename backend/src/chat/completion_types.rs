//! OpenAI chat completion wire types
//!
//! Structs that mirror the chat completion JSON request and response format.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`
#[derive(Serialize, Debug)]
pub struct CompletionRequest {
    /// Model name
    pub model: String,
    /// System instruction followed by the user prompt
    pub messages: Vec<RequestMessage>,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// A single message in the request
#[derive(Serialize, Debug)]
pub struct RequestMessage {
    /// `system` or `user`
    pub role: &'static str,
    /// Message text
    pub content: String,
}

/// Top-level chat completion response
#[derive(Deserialize, Debug)]
pub struct CompletionResponse {
    /// Generated alternatives (typically one)
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A single generated alternative
#[derive(Deserialize, Debug)]
pub struct Choice {
    /// The generated message
    pub message: ResponseMessage,
    /// Why the model stopped generating
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message inside a [`Choice`]
#[derive(Deserialize, Debug)]
pub struct ResponseMessage {
    /// Generated text; absent for tool calls
    #[serde(default)]
    pub content: Option<String>,
}

/// Error envelope returned with non-success statuses
#[derive(Deserialize, Debug)]
pub struct ApiErrorResponse {
    /// Error details
    pub error: ApiErrorBody,
}

/// Error details
#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Error category, e.g. `insufficient_quota`
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Machine-readable code, e.g. `invalid_api_key`
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: "be helpful".to_string(),
                },
                RequestMessage {
                    role: "user",
                    content: "hi".to_string(),
                },
            ],
            max_tokens: 500,
            temperature: 0.5,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn test_error_deserialization() {
        let json = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","param":null,"code":"insufficient_quota"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.code.as_deref(), Some("insufficient_quota"));
        assert_eq!(parsed.error.error_type.as_deref(), Some("insufficient_quota"));
    }
}
