//! Application layer - the page flow controller and its session view.
//!
//! This layer orchestrates domain decisions and coordinates between ports:
//! the pure flow functions decide, the controller reads and writes the
//! session store and runs the prediction provider.

mod controller;
mod results_view;
mod session_state;

pub use controller::{NavigationOutcome, PageFlowController};
pub use results_view::ResultsView;
pub use session_state::SessionState;
