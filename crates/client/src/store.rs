//! Persisted bearer-token storage.
//!
//! The token is the only piece of client-side persisted state. The store is
//! injected into [`ApiClient`](crate::ApiClient) so the transport can attach
//! the token to every request and clear it on a 401; the application supplies
//! a browser-storage implementation, tests use [`MemoryStore`].

use std::sync::Mutex;

/// Storage for the single persisted bearer token.
pub trait TokenStore: Send + Sync {
    /// Read the current token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a new token.
    fn save(&self, token: &str);

    /// Remove the persisted token.
    fn clear(&self);
}

/// In-memory token store, used in tests and anywhere no persistence is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);

        store.save("abc123");
        assert_eq!(store.load(), Some("abc123".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
