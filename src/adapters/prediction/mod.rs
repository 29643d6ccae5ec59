//! Prediction Provider Adapters.
//!
//! - `MockPredictionProvider` - fixed delay, fixed low-risk output

mod mock_provider;

pub use mock_provider::{
    mock_prediction, MockPredictionProvider, DEFAULT_MOCK_DELAY, MOCK_CONFIDENCE,
};
