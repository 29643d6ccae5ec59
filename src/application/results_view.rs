//! What the Results page shows while a prediction is pending or done.

use crate::domain::foundation::PredictionRequestId;
use crate::domain::prediction::PredictionResult;
use crate::ports::PredictionError;

/// Observable state of the Results page.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Not on Results, or the previous visit was left.
    Idle,
    /// A prediction is running.
    Loading { request_id: PredictionRequestId },
    Ready(PredictionResult),
    Failed(PredictionError),
}

impl ResultsView {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResultsView::Loading { .. })
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            ResultsView::Ready(result) => Some(result),
            _ => None,
        }
    }
}
