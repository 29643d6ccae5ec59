//! Prediction output shown on the Results page.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Default file name offered when results are saved.
pub const EXPORT_FILE_NAME: &str = "heart-health-results.json";

/// Risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// Result of one prediction. Never persisted; regenerated per visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk: RiskLevel,
    pub confidence: Percentage,
    pub recommendations: Vec<String>,
    pub precautions: Vec<String>,
    pub lifestyle: Vec<String>,
}

impl PredictionResult {
    /// Pretty-printed JSON for saving the results to a file.
    pub fn to_export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
