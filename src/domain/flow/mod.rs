//! Flow module - pages, routes, entry guards and the transition table.
//!
//! Everything here is pure: the application layer's controller reads the
//! session, asks these functions what to do, and applies the answer.

mod errors;
mod event;
mod guard;
mod page;
mod routes;
mod transition;

pub use errors::FlowError;
pub use event::FlowEvent;
pub use guard::{entry_guard, GuardPolicy, Redirect, RedirectReason, SessionSnapshot};
pub use page::Page;
pub use routes::{normalize, resolve, RouteMatch};
pub use transition::{transition, FlowAction, Transition};
