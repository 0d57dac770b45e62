//! # In-Memory Session Store
//!
//! A process-local [`SessionStore`] used by tests and by hosts without a
//! real storage/navigation surface. Navigations are recorded rather than
//! performed, so callers can assert on redirect behavior.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::store::SessionStore;

/// In-memory session store backed by mutexes
pub struct MemorySessionStore {
    active: bool,
    token: Mutex<Option<String>>,
    current_path: Mutex<Option<String>>,
    navigations: Mutex<Vec<String>>,
}

impl MemorySessionStore {
    /// Create an active store with no token and no current path
    pub fn new() -> Self {
        Self {
            active: true,
            token: Mutex::new(None),
            current_path: Mutex::new(None),
            navigations: Mutex::new(Vec::new()),
        }
    }

    /// Create an active store positioned at the given path
    pub fn at_path<S: Into<String>>(path: S) -> Self {
        let store = Self::new();
        *store.current_path.lock() = Some(path.into());
        store
    }

    /// Create a store that reports no session context at all
    ///
    /// Models the server-side-rendering case where invalidation must skip
    /// entirely.
    pub fn inactive() -> Self {
        Self {
            active: false,
            ..Self::new()
        }
    }

    /// Every navigation performed so far, oldest first
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn is_active(&self) -> bool {
        self.active
    }

    async fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    async fn set_token(&self, token: &str) {
        *self.token.lock() = Some(token.to_string());
    }

    async fn clear_token(&self) {
        *self.token.lock() = None;
    }

    async fn current_path(&self) -> Option<String> {
        self.current_path.lock().clone()
    }

    async fn navigate(&self, path: &str) {
        *self.current_path.lock() = Some(path.to_string());
        self.navigations.lock().push(path.to_string());
    }
}
