//! IgniteHub Backend Library
//!
//! Contact form and IdeaForge++ chat flows, their external clients, and the
//! HTTP API exposing them. The server binary is in `src/main.rs`; the GUI
//! uses the flows directly.

pub mod api;
pub mod chat;
pub mod config;
pub mod contact;
pub mod error;
/// Application state management
///
/// Holds the configured clients and open chat sessions.
pub mod state;
