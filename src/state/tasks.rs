// Background work for the GUI
// Network calls run on a tokio runtime; results come back over a channel and
// are applied on the UI thread at the start of the next frame

use crate::state::AppState;
use eframe::egui;
use ignitehub_backend::chat::{
    CompletionClient, CompletionError, OpenAiClient, SendStep, SYSTEM_PROMPT,
};
use ignitehub_backend::config::Config;
use ignitehub_backend::contact::{ContactStore, StoreError, SupabaseStore};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a background call
#[derive(Debug)]
pub enum TaskResult {
    /// Contact insert finished
    ContactSubmitted(Result<(), StoreError>),
    /// Completion call finished
    ChatReplied(Result<String, CompletionError>),
}

/// Apply a finished background call to the page it belongs to
pub fn apply_result(state: &mut AppState, result: TaskResult) {
    match result {
        TaskResult::ContactSubmitted(result) => {
            state.contact.finish_submit(result);
        }
        TaskResult::ChatReplied(result) => {
            if !state.chat.finish_send(result) {
                warn!("Dropped a chat reply with no pending message");
            }
        }
    }
}

/// External clients plus the runtime they run on
pub struct Services {
    runtime: tokio::runtime::Runtime,
    store: Arc<dyn ContactStore>,
    completion: Arc<dyn CompletionClient>,
    contact_table: String,
    sender: Sender<TaskResult>,
    receiver: Receiver<TaskResult>,
}

impl Services {
    /// Create services from explicit clients
    pub fn new(
        runtime: tokio::runtime::Runtime,
        store: Arc<dyn ContactStore>,
        completion: Arc<dyn CompletionClient>,
        contact_table: String,
    ) -> Self {
        let (sender, receiver) = channel();
        Self {
            runtime,
            store,
            completion,
            contact_table,
            sender,
            receiver,
        }
    }

    /// Create services with the real HTTP clients
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let http = reqwest::Client::new();
        let store = Arc::new(SupabaseStore::from_config(http.clone(), &config.database));
        let completion = Arc::new(OpenAiClient::new(http, config.completion.clone()));
        Ok(Self::new(
            runtime,
            store,
            completion,
            config.database.contact_table.clone(),
        ))
    }

    /// Whether the contact form can store messages
    pub fn contact_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// Whether the chat has a completion credential
    pub fn chat_configured(&self) -> bool {
        self.completion.is_configured()
    }

    /// Submit the contact form, inserting in the background if it validates
    pub fn submit_contact(&self, state: &mut AppState, ctx: &egui::Context) {
        let Some(submission) = state.contact.begin_submit(self.contact_configured()) else {
            return;
        };

        let store = Arc::clone(&self.store);
        let table = self.contact_table.clone();
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = store
                .insert(&table, std::slice::from_ref(&submission))
                .await;
            if sender.send(TaskResult::ContactSubmitted(result)).is_err() {
                debug!("UI closed before contact insert finished");
            }
            ctx.request_repaint();
        });
    }

    /// Send the chat input, requesting a completion in the background if needed
    pub fn send_chat(&self, state: &mut AppState, ctx: &egui::Context) {
        let SendStep::Pending(prompt) = state.chat.begin_send(self.chat_configured()) else {
            return;
        };

        let completion = Arc::clone(&self.completion);
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = completion.complete(SYSTEM_PROMPT, &prompt).await;
            if sender.send(TaskResult::ChatReplied(result)).is_err() {
                debug!("UI closed before completion finished");
            }
            ctx.request_repaint();
        });
    }

    /// Apply every finished background call
    /// Returns how many were applied
    pub fn drain(&self, state: &mut AppState) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.receiver.try_recv() {
            apply_result(state, result);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignitehub_backend::chat::replies::NOT_CONFIGURED_REPLY;
    use ignitehub_backend::contact::{ContactField, ContactSubmission, SubmitStatus};
    use std::sync::Mutex;
    use std::time::Duration;

    struct FakeStore {
        rows: Mutex<Vec<ContactSubmission>>,
    }

    #[async_trait::async_trait]
    impl ContactStore for FakeStore {
        fn is_configured(&self) -> bool {
            true
        }

        async fn insert(&self, _table: &str, rows: &[ContactSubmission]) -> Result<(), StoreError> {
            self.rows.lock().unwrap().extend_from_slice(rows);
            Ok(())
        }
    }

    struct EchoCompletion {
        configured: bool,
    }

    #[async_trait::async_trait]
    impl CompletionClient for EchoCompletion {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, _system: &str, prompt: &str) -> Result<String, CompletionError> {
            Ok(format!("echo: {}", prompt))
        }
    }

    fn services(store: Arc<FakeStore>, chat_configured: bool) -> Services {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        Services::new(
            runtime,
            store,
            Arc::new(EchoCompletion {
                configured: chat_configured,
            }),
            "contacts".to_string(),
        )
    }

    fn wait_for_result(services: &Services, state: &mut AppState) {
        let result = services
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("background task finished");
        apply_result(state, result);
    }

    #[test]
    fn test_contact_submit_round_trip() {
        let store = Arc::new(FakeStore {
            rows: Mutex::new(Vec::new()),
        });
        let services = services(store.clone(), true);
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.contact.set_field(ContactField::Name, "Ada ");
        state.contact.set_field(ContactField::Email, "ada@example.com");
        state.contact.set_field(ContactField::Message, "Loving the resource list");

        services.submit_contact(&mut state, &ctx);
        assert!(state.contact.is_submitting());

        wait_for_result(&services, &mut state);

        assert_eq!(state.contact.status(), SubmitStatus::Success);
        assert!(state.contact.name.is_empty());
        assert_eq!(store.rows.lock().unwrap()[0].name, "Ada");
    }

    #[test]
    fn test_invalid_contact_spawns_nothing() {
        let store = Arc::new(FakeStore {
            rows: Mutex::new(Vec::new()),
        });
        let services = services(store.clone(), true);
        let ctx = egui::Context::default();
        let mut state = AppState::new();

        services.submit_contact(&mut state, &ctx);

        assert_eq!(state.contact.status(), SubmitStatus::Error);
        assert_eq!(state.contact.error_message(), "Name is required");
        assert_eq!(services.drain(&mut state), 0);
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[test]
    fn test_chat_round_trip() {
        let store = Arc::new(FakeStore {
            rows: Mutex::new(Vec::new()),
        });
        let services = services(store, true);
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.chat.set_input("robotics idea");

        services.send_chat(&mut state, &ctx);
        assert!(state.chat.is_busy());

        wait_for_result(&services, &mut state);

        assert!(!state.chat.is_busy());
        assert_eq!(
            state.chat.last_reply().unwrap().content,
            "echo: robotics idea"
        );
    }

    #[test]
    fn test_chat_unconfigured_answers_inline() {
        let store = Arc::new(FakeStore {
            rows: Mutex::new(Vec::new()),
        });
        let services = services(store, false);
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.chat.set_input("hello");

        services.send_chat(&mut state, &ctx);

        assert!(!state.chat.is_busy());
        assert_eq!(state.chat.last_reply().unwrap().content, NOT_CONFIGURED_REPLY);
        assert_eq!(services.drain(&mut state), 0);
    }
}
