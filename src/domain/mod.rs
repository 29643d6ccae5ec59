//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, state machine)
//! - `auth` - Sign-in state and the register/login forms
//! - `assessment` - The thirteen-field questionnaire and its validation
//! - `prediction` - Risk result types
//! - `session` - Keys of the per-profile session store
//! - `flow` - Pages, routes, entry guards and the transition table

pub mod assessment;
pub mod auth;
pub mod flow;
pub mod foundation;
pub mod prediction;
pub mod session;
