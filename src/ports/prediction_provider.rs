//! Prediction Provider Port - turns assessment answers into a risk result.
//!
//! The only implementation today is a mock with a fixed delay and fixed
//! output. A real inference service plugs in here without the page flow
//! noticing.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct RemoteModel { client: reqwest::Client }
//!
//! #[async_trait]
//! impl PredictionProvider for RemoteModel {
//!     async fn generate(&self, request: PredictionRequest) -> Result<PredictionResult, PredictionError> {
//!         // POST request.answers.form() to the model endpoint
//!     }
//!     fn provider_info(&self) -> ProviderInfo { ProviderInfo::new("remote", "v1") }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::AssessmentAnswers;
use crate::domain::foundation::{ErrorCode, PredictionRequestId};
use crate::domain::prediction::PredictionResult;

/// Port for generating predictions.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// Generates a prediction for the given answers.
    ///
    /// Callers may drop the returned future at any time; implementations
    /// must not rely on running to completion.
    async fn generate(&self, request: PredictionRequest) -> Result<PredictionResult, PredictionError>;

    /// Describes the provider for logs.
    fn provider_info(&self) -> ProviderInfo;
}

/// One prediction request.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub id: PredictionRequestId,
    pub answers: AssessmentAnswers,
}

impl PredictionRequest {
    pub fn new(answers: AssessmentAnswers) -> Self {
        Self {
            id: PredictionRequestId::new(),
            answers,
        }
    }
}

/// Provider name and model version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Errors a provider can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("Prediction service unavailable: {0}")]
    Unavailable(String),

    #[error("Prediction rejected the answers: {0}")]
    InvalidInput(String),

    #[error("Prediction timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
}

impl PredictionError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        PredictionError::Unavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::PredictionFailed
    }
}
