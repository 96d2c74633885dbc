//! Chat module
//!
//! IdeaForge++ chat sessions and the completion API client.

pub mod completion;
pub mod completion_types;
pub mod models;
pub mod prompt;
pub mod registry;
pub mod replies;
pub mod session;

pub use completion::{CompletionClient, CompletionError, OpenAiClient};
pub use models::{ChatMessage, MessageRole};
pub use prompt::{QuickPrompt, QUICK_PROMPTS, SYSTEM_PROMPT};
pub use registry::SessionRegistry;
pub use session::{ChatSession, SendStep};
