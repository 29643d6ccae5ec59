//! Session Store Port - per-profile key/value persistence.
//!
//! Stands in for a browser's local storage: a handful of string values that
//! survive reloads until explicitly removed. There is no expiry and no size
//! limit.
//!
//! Keys are the closed [`SessionKey`] set so adapters never see a
//! misspelled key.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::session::SessionKey;

/// Errors that can occur while reading or writing the store.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to encode value for '{key}': {reason}")]
    Encoding { key: SessionKey, reason: String },
}

impl SessionStoreError {
    pub fn io(message: impl Into<String>) -> Self {
        SessionStoreError::Io(message.into())
    }

    pub fn encoding(key: SessionKey, reason: impl Into<String>) -> Self {
        SessionStoreError::Encoding {
            key,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionStoreError::Io(_) => ErrorCode::SessionStoreUnavailable,
            SessionStoreError::Encoding { .. } => ErrorCode::InternalError,
        }
    }
}

/// Port for the per-profile session store.
///
/// # Contract
///
/// - `get` returns exactly what the last `set` for that key wrote, until
///   `remove` is called
/// - `remove` of an absent key is not an error
/// - values are opaque strings; the store never interprets them
/// - stored data the adapter cannot decode reads as absent, not as an error
pub trait SessionStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionStoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionStoreError>;

    /// Removes `key` from the store.
    fn remove(&self, key: SessionKey) -> Result<(), SessionStoreError>;
}
