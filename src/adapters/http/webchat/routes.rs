//! HTTP routes for webchat endpoints.

use axum::{routing::post, Router};

use super::handlers::{reset_session, send_message, WebchatHandlers};

/// Creates the webchat router.
///
/// # Routes
/// - `POST /webchat/message` - Process one caller message
/// - `POST /admin/reset_session/:session_id` - Forget a session
pub fn webchat_routes(handlers: WebchatHandlers) -> Router {
    Router::new()
        .route("/webchat/message", post(send_message))
        .route("/admin/reset_session/:session_id", post(reset_session))
        .with_state(handlers)
}
