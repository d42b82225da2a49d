//! Adapters - Implementations of port interfaces and outer surfaces.
//!
//! - `http` - axum router for the chat widget
//! - `storage` - Session store implementations

pub mod http;
pub mod storage;

pub use http::app_router;
pub use storage::InMemorySessionStore;
