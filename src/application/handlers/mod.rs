//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod intake;

pub use intake::{
    IntakeError, ResetSessionCommand, ResetSessionHandler, SendMessageCommand, SendMessageHandler,
    SendMessageResult, StateSource,
};
