// State management module
// Handles shared server state and the chat session registry

pub mod app_state;

pub use app_state::{AppState, SharedState};
