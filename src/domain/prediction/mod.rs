//! Prediction module - the risk result produced from an assessment.

mod result;

pub use result::{PredictionResult, RiskLevel, EXPORT_FILE_NAME};
