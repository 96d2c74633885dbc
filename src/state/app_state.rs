// Application state management
// Contains the current page, both page states, and UI preferences

use ignitehub_backend::chat::ChatSession;
use ignitehub_backend::contact::ContactForm;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page
    Home,
    /// IdeaForge++ chat assistant
    IdeaForge,
    /// Contact form
    Contact,
}

impl Page {
    /// All pages in sidebar order
    pub const ALL: [Page; 3] = [Page::Home, Page::IdeaForge, Page::Contact];

    /// Sidebar label
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::IdeaForge => "IdeaForge++",
            Page::Contact => "Contact",
        }
    }
}

/// Main application state
/// Page-local state lives for the whole app session; switching pages keeps it
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page currently shown
    pub page: Page,
    /// Contact page form
    pub contact: ContactForm,
    /// IdeaForge++ conversation
    pub chat: ChatSession,
    /// UI state preferences
    pub ui_state: UiState,
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the sidebar is visible
    pub sidebar_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_visible: true,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            contact: ContactForm::new(),
            chat: ChatSession::new(),
            ui_state: UiState::default(),
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a page
    /// Returns true if the page changed
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            false
        } else {
            self.page = page;
            true
        }
    }

    /// Start a fresh conversation, dropping the current one
    /// Refused while a reply is pending
    pub fn reset_chat(&mut self) -> bool {
        if self.chat.is_busy() {
            return false;
        }
        self.chat = ChatSession::new();
        true
    }
}
