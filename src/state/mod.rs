// State management module
// Handles page state, background work, and UI state

pub mod app_state;
pub mod tasks;

pub use app_state::{AppState, Page};
pub use tasks::{apply_result, Services, TaskResult};
