//! In-memory chat session registry
//!
//! Sessions live only as long as the process; nothing is persisted. The
//! registry holds at most a fixed number of sessions: creating one past the
//! limit evicts the least recently used idle session.

use crate::chat::session::ChatSession;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Default upper bound on open sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

#[derive(Debug)]
struct Entry {
    session: ChatSession,
    last_used: u64,
}

/// Registry of open chat sessions keyed by id
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, Entry>,
    max_sessions: usize,
    clock: u64,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionRegistry {
    /// Create an empty registry with the default limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry holding at most `max_sessions` sessions
    pub fn with_limit(max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            max_sessions: max_sessions.max(1),
            clock: 0,
        }
    }

    /// Open a new session and return a snapshot of it
    pub fn create(&mut self) -> ChatSession {
        while self.sessions.len() >= self.max_sessions {
            if !self.evict_least_recent() {
                break;
            }
        }

        let session = ChatSession::new();
        let last_used = self.tick();
        self.sessions.insert(
            session.id(),
            Entry {
                session: session.clone(),
                last_used,
            },
        );
        session
    }

    /// Get a session by id
    pub fn get(&self, id: &Uuid) -> Option<&ChatSession> {
        self.sessions.get(id).map(|entry| &entry.session)
    }

    /// Get a session by id for modification, marking it as recently used
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut ChatSession> {
        let now = self.tick();
        self.sessions.get_mut(id).map(|entry| {
            entry.last_used = now;
            &mut entry.session
        })
    }

    /// Remove a session, returning it if it existed
    pub fn remove(&mut self, id: &Uuid) -> Option<ChatSession> {
        self.sessions.remove(id).map(|entry| entry.session)
    }

    /// Number of open sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are open
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    // Sessions waiting on a reply are never evicted
    fn evict_least_recent(&mut self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .filter(|(_, entry)| !entry.session.is_busy())
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| *id);

        match oldest {
            Some(id) => {
                self.sessions.remove(&id);
                debug!(session_id = %id, "Evicted least recently used chat session");
                true
            }
            None => false,
        }
    }
}
