//! HTTP adapters - REST API implementations.

pub mod chat_page;
pub mod health;
mod router;
pub mod webchat;

pub use router::app_router;
pub use webchat::{webchat_routes, WebchatHandlers};
