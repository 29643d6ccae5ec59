//! Session store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where session state is kept
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: SessionBackend,

    /// JSON file used by the file backend
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

/// Session store backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Lost when the process exits
    Memory,
    /// Survives restarts, like browser local storage survives a reload
    #[default]
    File,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == SessionBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptySessionPath);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(".heartwise/session.json")
}
