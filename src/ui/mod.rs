// UI module
// Contains layout, pages, and shared components

pub mod chat;
pub mod components;
pub mod contact;
pub mod home;
pub mod layout;

pub use layout::render_app_layout;
