//! Application layer - Commands and Handlers.
//!
//! Orchestrates the pure intake domain with the session store port and
//! owns the per-session serialization the domain relies on.

pub mod handlers;
mod session_locks;

pub use handlers::{
    IntakeError, ResetSessionCommand, ResetSessionHandler, SendMessageCommand, SendMessageHandler,
    SendMessageResult, StateSource,
};
pub use session_locks::SessionLocks;
