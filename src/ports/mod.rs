//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - per-profile key/value persistence
//! - `PredictionProvider` - assessment → risk result

mod prediction_provider;
mod session_store;

pub use prediction_provider::{
    PredictionError, PredictionProvider, PredictionRequest, ProviderInfo,
};
pub use session_store::{SessionStore, SessionStoreError};
