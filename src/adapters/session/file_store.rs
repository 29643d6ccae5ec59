//! File-backed session store.
//!
//! Keeps every session key in one JSON object on disk so state survives a
//! restart, the way local storage survives a page reload.
//!
//! # Atomic Writes
//!
//! Each write goes to `{path}.tmp` and is then renamed over `{path}`, so a
//! crash mid-write leaves the previous file intact. A failed write removes
//! the temp file.
//!
//! # Damaged Files
//!
//! A file that is not a JSON object reads as empty, and a key whose value is
//! not a string reads as absent. Both are logged, never returned as errors,
//! so a bad file cannot lock the visitor out of public pages.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::session::SessionKey;
use crate::ports::{SessionStore, SessionStoreError};

type Entries = Map<String, Value>;

/// Session store persisted as a JSON file.
///
/// Entries under names this build does not know are kept untouched.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Creates a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn load(&self) -> Result<Entries, SessionStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(SessionStoreError::io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => {
                warn!(path = %self.path.display(), "Session file is not a JSON object, ignoring it");
                Ok(Entries::new())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is unreadable, ignoring it");
                Ok(Entries::new())
            }
        }
    }

    fn persist(&self, entries: &Entries) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SessionStoreError::io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionStoreError::io(format!("Failed to encode session: {}", e)))?;

        let temp_path = self.temp_path();
        if let Err(e) = self.write_and_swap(&temp_path, json.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        debug!(path = %self.path.display(), keys = entries.len(), "Session file written");
        Ok(())
    }

    fn write_and_swap(&self, temp_path: &Path, bytes: &[u8]) -> Result<(), SessionStoreError> {
        let mut file = fs::File::create(temp_path).map_err(|e| {
            SessionStoreError::io(format!("Failed to create {}: {}", temp_path.display(), e))
        })?;
        file.write_all(bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| {
                SessionStoreError::io(format!("Failed to write {}: {}", temp_path.display(), e))
            })?;
        drop(file);

        fs::rename(temp_path, &self.path).map_err(|e| {
            SessionStoreError::io(format!(
                "Failed to move {} into place: {}",
                temp_path.display(),
                e
            ))
        })
    }

    fn update<F>(&self, apply: F) -> Result<(), SessionStoreError>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        let _guard = self.write_lock.lock().unwrap();
        let mut entries = self.load()?;
        if apply(&mut entries) {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionStoreError> {
        match self.load()?.remove(key.as_str()) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                warn!(key = %key, found = %other, "Session value is not a string, reading as absent");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionStoreError> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), Value::String(value.to_string()));
            true
        })
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionStoreError> {
        self.update(|entries| entries.remove(key.as_str()).is_some())
    }
}
