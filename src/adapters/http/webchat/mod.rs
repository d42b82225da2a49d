//! HTTP adapter for the webchat widget.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, IncomingMessage, OutgoingMessage, ResetSessionResponse};
pub use handlers::WebchatHandlers;
pub use routes::webchat_routes;
