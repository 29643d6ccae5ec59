//! Session Store Adapters.
//!
//! - `InMemorySessionStore` - process-lifetime map, for tests and ephemeral runs
//! - `FileSessionStore` - JSON file on disk, survives restarts

mod file_store;
mod in_memory;

pub use file_store::FileSessionStore;
pub use in_memory::InMemorySessionStore;
