//! Ports - Interfaces for external dependencies.
//!
//! The intake domain is pure; ports describe what the application layer
//! needs from the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Keeps one `SessionState` per session key

mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
