//! Chat session state
//!
//! An append-only list of turns that always starts with the assistant
//! greeting. Each accepted user turn is followed by exactly one assistant
//! turn, either the completion text or a failure reply. While a reply is
//! pending the session is busy and further sends are ignored.

use crate::chat::completion::{CompletionClient, CompletionError};
use crate::chat::models::{ChatMessage, MessageRole};
use crate::chat::prompt::{build_prompt, GREETING, QUICK_PROMPTS, SYSTEM_PROMPT};
use crate::chat::replies::{reply_for, NOT_CONFIGURED_REPLY};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

/// Outcome of [`ChatSession::begin_send`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStep {
    /// Input was blank or a reply is already pending; nothing changed
    Ignored,
    /// User turn and the canned "not configured" reply were both appended
    Answered,
    /// User turn appended; call the completion API with this prompt and pass
    /// the result to [`ChatSession::finish_send`]
    Pending(String),
}

/// One IdeaForge++ conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    id: Uuid,
    messages: Vec<ChatMessage>,
    /// Current contents of the input box
    pub input: String,
    busy: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create a session seeded with the greeting
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage::assistant(GREETING)],
            input: String::new(),
            busy: false,
        }
    }

    /// Session identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// All turns in order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is pending
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the send button should be enabled
    pub fn can_send(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    /// Replace the input text
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Fill the input with one of the quick prompts
    ///
    /// Returns false if `index` is out of range.
    pub fn apply_quick_prompt(&mut self, index: usize) -> bool {
        match QUICK_PROMPTS.get(index) {
            Some(quick) => {
                self.input = quick.prompt.to_string();
                true
            }
            None => false,
        }
    }

    /// Last assistant turn, if any
    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
    }

    /// Start sending the current input
    ///
    /// Appends the user turn, clears the input and marks the session busy.
    /// With no credential the canned reply is appended straight away and the
    /// session is left idle.
    pub fn begin_send(&mut self, client_configured: bool) -> SendStep {
        if self.busy || self.input.trim().is_empty() {
            return SendStep::Ignored;
        }

        let input = std::mem::take(&mut self.input);
        let prompt = build_prompt(&input);
        self.messages.push(ChatMessage::user(input));
        self.busy = true;

        if !client_configured {
            warn!(session_id = %self.id, "Completion API not configured, sending canned reply");
            self.push_reply(NOT_CONFIGURED_REPLY.to_string());
            return SendStep::Answered;
        }

        SendStep::Pending(prompt)
    }

    /// Append the assistant turn for a pending send
    ///
    /// Returns false (and appends nothing) if no send was pending.
    pub fn finish_send(&mut self, result: Result<String, CompletionError>) -> bool {
        if !self.busy {
            return false;
        }

        let reply = match result {
            Ok(text) => {
                info!(session_id = %self.id, response_len = text.len(), "Completion received");
                text
            }
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "Completion failed");
                reply_for(&e).to_string()
            }
        };
        self.push_reply(reply);
        true
    }

    /// Run the whole send flow against `client`
    ///
    /// Makes at most one completion call, and none when the client is
    /// unconfigured or nothing was sent.
    pub async fn send(&mut self, client: &dyn CompletionClient) -> SendStep {
        let step = self.begin_send(client.is_configured());
        if let SendStep::Pending(prompt) = &step {
            let result = client.complete(SYSTEM_PROMPT, prompt).await;
            self.finish_send(result);
        }
        step
    }

    /// Drop every turn except a fresh greeting
    ///
    /// Refused while a reply is pending.
    pub fn clear(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.messages = vec![ChatMessage::assistant(GREETING)];
        self.input.clear();
        true
    }

    fn push_reply(&mut self, content: String) {
        self.messages.push(ChatMessage::assistant(content));
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::replies::{GENERIC_ERROR_REPLY, RATE_LIMIT_REPLY};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers with canned results and records prompts
    struct ScriptedClient {
        configured: bool,
        reply: fn() -> Result<String, CompletionError>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedClient {
        fn new(configured: bool, reply: fn() -> Result<String, CompletionError>) -> Self {
            Self {
                configured,
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), prompt.to_string()));
            (self.reply)()
        }
    }

    fn ok_reply() -> Result<String, CompletionError> {
        Ok("Try building a habit tracker".to_string())
    }

    #[test]
    fn test_new_session_has_single_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, MessageRole::Assistant);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(!session.is_busy());
        assert!(!session.can_send());
    }

    #[tokio::test]
    async fn test_send_success_appends_reply() {
        let client = ScriptedClient::new(true, ok_reply);
        let mut session = ChatSession::new();
        session.set_input("  any ideas? ");

        let step = session.send(&client).await;

        assert_eq!(step, SendStep::Pending("any ideas?".to_string()));
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "  any ideas? ");
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert_eq!(messages[2].content, "Try building a habit tracker");
        assert!(session.input.is_empty());
        assert!(!session.is_busy());

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SYSTEM_PROMPT);
        assert_eq!(calls[0].1, "any ideas?");
    }

    #[tokio::test]
    async fn test_unconfigured_client_gets_canned_reply_without_call() {
        let client = ScriptedClient::new(false, ok_reply);
        let mut session = ChatSession::new();
        session.set_input("hello");

        let step = session.send(&client).await;

        assert_eq!(step, SendStep::Answered);
        assert_eq!(client.call_count(), 0);
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content, NOT_CONFIGURED_REPLY);
        assert_eq!(
            messages
                .iter()
                .filter(|m| m.content == NOT_CONFIGURED_REPLY)
                .count(),
            1
        );
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_specific_reply() {
        let client = ScriptedClient::new(true, || {
            Err(CompletionError::Http {
                status: 429,
                detail: "rate_limit_exceeded".to_string(),
            })
        });
        let mut session = ChatSession::new();
        session.set_input("hello");

        session.send(&client).await;

        let reply = session.last_reply().unwrap();
        assert_eq!(reply.content, RATE_LIMIT_REPLY);
        assert_ne!(reply.content, GENERIC_ERROR_REPLY);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_unknown_failure_maps_to_generic_reply() {
        let client = ScriptedClient::new(true, || {
            Err(CompletionError::Transport("connection reset".to_string()))
        });
        let mut session = ChatSession::new();
        session.set_input("hello");

        session.send(&client).await;

        assert_eq!(session.last_reply().unwrap().content, GENERIC_ERROR_REPLY);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let client = ScriptedClient::new(true, ok_reply);
        let mut session = ChatSession::new();
        session.set_input("   \n");

        assert_eq!(session.send(&client).await, SendStep::Ignored);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_busy_blocks_reentry() {
        let mut session = ChatSession::new();
        session.set_input("first");
        assert!(matches!(session.begin_send(true), SendStep::Pending(_)));
        assert!(session.is_busy());

        session.set_input("second");
        assert!(!session.can_send());
        assert_eq!(session.begin_send(true), SendStep::Ignored);
        assert_eq!(session.messages().len(), 2);

        assert!(session.finish_send(Ok("reply".to_string())));
        assert!(!session.is_busy());
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_finish_without_pending_is_noop() {
        let mut session = ChatSession::new();
        assert!(!session.finish_send(Ok("stray".to_string())));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_every_user_turn_answered_once() {
        let mut session = ChatSession::new();
        for i in 0..3 {
            session.set_input(format!("question {}", i));
            session.begin_send(true);
            session.finish_send(Ok(format!("answer {}", i)));
        }

        let roles: Vec<_> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles[0], MessageRole::Assistant);
        for pair in roles[1..].chunks(2) {
            assert_eq!(pair, [MessageRole::User, MessageRole::Assistant]);
        }
    }

    #[test]
    fn test_quick_prompt_and_clear() {
        let mut session = ChatSession::new();
        assert!(session.apply_quick_prompt(2));
        assert_eq!(session.input, QUICK_PROMPTS[2].prompt);
        assert!(!session.apply_quick_prompt(99));

        session.begin_send(false);
        assert_eq!(session.messages().len(), 3);

        assert!(session.clear());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[test]
    fn test_clear_refused_while_busy() {
        let mut session = ChatSession::new();
        session.set_input("hello");
        session.begin_send(true);
        assert!(!session.clear());
        assert_eq!(session.messages().len(), 2);
    }
}
