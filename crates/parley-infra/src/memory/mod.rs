//! In-memory session store.

mod store;

pub use store::MemorySessionStore;
