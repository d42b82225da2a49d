//! Intake command handlers.

mod error;
mod reset_session;
mod send_message;

pub use error::IntakeError;
pub use reset_session::{ResetSessionCommand, ResetSessionHandler};
pub use send_message::{
    SendMessageCommand, SendMessageHandler, SendMessageResult, StateSource,
    DEFAULT_MAX_MESSAGE_LENGTH,
};
