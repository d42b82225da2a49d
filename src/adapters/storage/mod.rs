//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! - **InMemorySessionStore** - Keeps state for the lifetime of the process
//!
//! ```ignore
//! use adapters::storage::InMemorySessionStore;
//!
//! let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
//! ```

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
