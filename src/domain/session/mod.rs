//! Session module - the keys persisted in the per-profile session store.

mod keys;

pub use keys::{SessionKey, LOGGED_IN_VALUE};
