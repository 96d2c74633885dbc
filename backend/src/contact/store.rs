//! Hosted database client for contact submissions
//!
//! The contact flow only needs two things from the database: whether it is
//! usable at all, and a single `insert(table, rows)` call. [`SupabaseStore`]
//! implements that against a PostgREST endpoint.

use crate::config::DatabaseConfig;
use crate::contact::models::ContactSubmission;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors reported by a [`ContactStore`]
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store has no URL or key
    #[error("Database is not configured")]
    NotConfigured,

    /// Request reached the backend and it reported an error
    #[error("Database error: {0}")]
    Backend(String),

    /// Request never got a usable answer
    #[error("Failed to reach database: {0}")]
    Transport(String),
}

/// Something contact rows can be inserted into
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Whether the store has enough configuration to accept inserts
    fn is_configured(&self) -> bool;

    /// Insert `rows` into `table`
    async fn insert(&self, table: &str, rows: &[ContactSubmission]) -> Result<(), StoreError>;
}

/// Error body returned by PostgREST
#[derive(Deserialize, Debug)]
struct PostgrestError {
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Supabase (PostgREST) table client
pub struct SupabaseStore {
    client: reqwest::Client,
    url: String,
    anon_key: String,
}

impl SupabaseStore {
    /// Create a store for the given project URL and anon key
    pub fn new(client: reqwest::Client, url: &str, anon_key: &str) -> Self {
        Self {
            client,
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Create a store from application configuration
    pub fn from_config(client: reqwest::Client, config: &DatabaseConfig) -> Self {
        Self::new(client, &config.url, &config.anon_key)
    }
}

#[async_trait]
impl ContactStore for SupabaseStore {
    fn is_configured(&self) -> bool {
        !self.anon_key.trim().is_empty()
            && (self.url.starts_with("https://") || self.url.starts_with("http://"))
    }

    async fn insert(&self, table: &str, rows: &[ContactSubmission]) -> Result<(), StoreError> {
        if !self.is_configured() {
            return Err(StoreError::NotConfigured);
        }

        let url = format!("{}/rest/v1/{}", self.url, table);

        tracing::debug!(table = %table, rows = rows.len(), "Inserting rows");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(table = %table, "Insert succeeded");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status.as_u16(),
            error_body = %body,
            "Database rejected insert"
        );

        let message = match serde_json::from_str::<PostgrestError>(&body) {
            Ok(PostgrestError {
                message: Some(message),
                details,
            }) => match details {
                Some(details) if !details.is_empty() => format!("{} ({})", message, details),
                _ => message,
            },
            _ => format!("HTTP {}: {}", status.as_u16(), body),
        };

        Err(StoreError::Backend(message))
    }
}
