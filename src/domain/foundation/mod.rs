//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and the
//! error types that form the vocabulary of the heartwise domain.

mod errors;
mod ids;
mod percentage;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::PredictionRequestId;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
