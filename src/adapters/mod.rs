//! Adapters - Implementations of port interfaces.
//!
//! - `session` - Session store implementations (in-memory, JSON file)
//! - `prediction` - Prediction provider implementations (mock)
//! - `terminal` - Line-oriented console driving the page flow

pub mod prediction;
pub mod session;
pub mod terminal;

pub use prediction::MockPredictionProvider;
pub use session::{FileSessionStore, InMemorySessionStore};
pub use terminal::{Command, Console, Control};
