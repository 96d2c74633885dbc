//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// How long a success or error banner stays up before reverting to idle
pub const BANNER_DURATION: Duration = Duration::from_secs(7);

/// Default OpenAI-compatible API base URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Hosted database configuration (contact form)
    pub database: DatabaseConfig,
    /// Completion API configuration (IdeaForge++ chat)
    pub completion: CompletionConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Hosted database configuration
#[derive(Clone, Default)]
pub struct DatabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Anonymous (public) API key
    pub anon_key: String,
    /// Table contact submissions are inserted into
    pub contact_table: String,
}

/// Completion API configuration
#[derive(Clone, Default)]
pub struct CompletionConfig {
    /// Bearer credential; empty means unconfigured
    pub api_key: String,
    /// Model name sent with every request
    pub model: String,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

// Keys stay out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &redact(&self.anon_key))
            .field("contact_table", &self.contact_table)
            .finish()
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl CompletionConfig {
    /// Completion settings with the given key and default model/endpoint
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("SUPABASE_URL").unwrap_or_default(),
                anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
                contact_table: env::var("CONTACT_TABLE")
                    .unwrap_or_else(|_| "contacts".to_string()),
            },
            completion: CompletionConfig {
                model: env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
                base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
                ..CompletionConfig::with_api_key(env::var("OPENAI_API_KEY").unwrap_or_default())
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
