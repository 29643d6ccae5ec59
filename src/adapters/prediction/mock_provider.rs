//! Mock Prediction Provider.
//!
//! Stand-in for a real inference service. Waits a fixed delay and then
//! returns the same low-risk result no matter what the answers are.
//!
//! # Features
//!
//! - Simulated latency (2000 ms by default) to drive loading indicators
//! - Error injection for exercising failure paths
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockPredictionProvider::new().with_delay(Duration::ZERO);
//!
//! let result = provider.generate(PredictionRequest::new(answers)).await?;
//! assert_eq!(result.risk, RiskLevel::Low);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::foundation::{Percentage, PredictionRequestId};
use crate::domain::prediction::{PredictionResult, RiskLevel};
use crate::ports::{PredictionError, PredictionProvider, PredictionRequest, ProviderInfo};

/// Latency the mock simulates unless configured otherwise.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(2000);

/// Confidence reported by the mock.
pub const MOCK_CONFIDENCE: Percentage = Percentage::new(85);

const RECOMMENDATIONS: [&str; 6] = [
    "Maintain a healthy diet rich in fruits and vegetables",
    "Engage in regular physical activity (at least 150 minutes per week)",
    "Monitor your blood pressure regularly",
    "Maintain a healthy weight",
    "Limit alcohol consumption",
    "Avoid smoking and tobacco products",
];

const PRECAUTIONS: [&str; 5] = [
    "Schedule regular check-ups with your healthcare provider",
    "Keep track of your cholesterol levels",
    "Manage stress through relaxation techniques",
    "Get adequate sleep (7-9 hours per night)",
    "Stay hydrated throughout the day",
];

const LIFESTYLE: [&str; 5] = [
    "Follow a heart-healthy diet (Mediterranean or DASH diet)",
    "Reduce sodium intake to less than 2,300mg per day",
    "Include omega-3 fatty acids in your diet",
    "Practice mindfulness or meditation",
    "Build a support network of family and friends",
];

/// The fixed result every successful mock call returns.
pub fn mock_prediction() -> PredictionResult {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    PredictionResult {
        risk: RiskLevel::Low,
        confidence: MOCK_CONFIDENCE,
        recommendations: owned(&RECOMMENDATIONS),
        precautions: owned(&PRECAUTIONS),
        lifestyle: owned(&LIFESTYLE),
    }
}

/// Mock prediction provider.
#[derive(Debug, Clone)]
pub struct MockPredictionProvider {
    /// Errors to return before falling back to the fixed result.
    errors: Arc<Mutex<VecDeque<PredictionError>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Ids of requests that reached the provider.
    calls: Arc<Mutex<Vec<PredictionRequestId>>>,
}

impl Default for MockPredictionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictionProvider {
    /// Creates a mock with the default 2000 ms delay.
    pub fn new() -> Self {
        Self {
            errors: Arc::new(Mutex::new(VecDeque::new())),
            delay: DEFAULT_MOCK_DELAY,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queues an error for the next call.
    pub fn with_error(self, error: PredictionError) -> Self {
        self.errors.lock().unwrap().push_back(error);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the ids of all recorded calls.
    pub fn calls(&self) -> Vec<PredictionRequestId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionProvider for MockPredictionProvider {
    async fn generate(&self, request: PredictionRequest) -> Result<PredictionResult, PredictionError> {
        self.calls.lock().unwrap().push(request.id);
        debug!(request_id = %request.id, delay_ms = self.delay.as_millis() as u64, "Mock prediction requested");

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        // Pop after the delay so a cancelled call does not consume a queued error.
        if let Some(error) = self.errors.lock().unwrap().pop_front() {
            return Err(error);
        }

        Ok(mock_prediction())
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "fixed-low-risk")
    }
}
