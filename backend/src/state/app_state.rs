// Application state management
// Contains the configured external clients and open chat sessions

use crate::chat::{CompletionClient, OpenAiClient, SessionRegistry};
use crate::config::Config;
use crate::contact::{ContactStore, SupabaseStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle passed to every handler
pub type SharedState = Arc<AppState>;

/// Main application state
/// Holds the external collaborators and the in-memory chat sessions
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Hosted database used by the contact form
    pub contact_store: Arc<dyn ContactStore>,
    /// Completion API used by the chat
    pub completion: Arc<dyn CompletionClient>,
    /// Open chat sessions
    pub sessions: RwLock<SessionRegistry>,
}

impl AppState {
    /// Create application state from explicit collaborators
    pub fn new(
        config: Config,
        contact_store: Arc<dyn ContactStore>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            config,
            contact_store,
            completion,
            sessions: RwLock::new(SessionRegistry::new()),
        }
    }

    /// Create application state with the real HTTP clients
    ///
    /// A single `reqwest::Client` is shared for connection pooling.
    pub fn from_config(config: Config) -> Self {
        let http = reqwest::Client::new();
        let contact_store = Arc::new(SupabaseStore::from_config(http.clone(), &config.database));
        let completion = Arc::new(OpenAiClient::new(http, config.completion.clone()));
        Self::new(config, contact_store, completion)
    }

    /// Table contact submissions are inserted into
    pub fn contact_table(&self) -> &str {
        &self.config.database.contact_table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompletionConfig, DatabaseConfig, ServerConfig};

    fn config(api_key: &str, db_url: &str) -> Config {
        Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
            },
            database: DatabaseConfig {
                url: db_url.to_string(),
                anon_key: "anon".to_string(),
                contact_table: "contacts".to_string(),
            },
            completion: CompletionConfig::with_api_key(api_key),
        }
    }

    #[test]
    fn test_from_config_unconfigured() {
        let state = AppState::from_config(config("", ""));
        assert!(!state.contact_store.is_configured());
        assert!(!state.completion.is_configured());
        assert_eq!(state.contact_table(), "contacts");
    }

    #[test]
    fn test_from_config_configured() {
        let state = AppState::from_config(config("sk-test", "https://x.supabase.co"));
        assert!(state.contact_store.is_configured());
        assert!(state.completion.is_configured());
    }
}
