//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one prediction request issued for a Results page visit.
///
/// Each visit gets a fresh id so log lines from a cancelled request can be
/// told apart from the one that finally renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRequestId(Uuid);

impl PredictionRequestId {
    /// Creates a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PredictionRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PredictionRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
