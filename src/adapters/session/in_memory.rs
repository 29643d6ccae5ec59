//! In-memory session store.
//!
//! Lives as long as the process. Used by tests and by the `memory`
//! session backend.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::session::SessionKey;
use crate::ports::{SessionStore, SessionStoreError};

/// Session store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: RwLock<HashMap<SessionKey, String>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value, for setting up test fixtures.
    pub fn with_value(self, key: SessionKey, value: impl Into<String>) -> Self {
        self.values.write().unwrap().insert(key, value.into());
        self
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionStoreError> {
        Ok(self.values.read().unwrap().get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionStoreError> {
        self.values.write().unwrap().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionStoreError> {
        self.values.write().unwrap().remove(&key);
        Ok(())
    }
}
