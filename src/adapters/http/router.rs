//! Assembles the full HTTP application.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, warn};

use super::chat_page::chat_page;
use super::health::health;
use super::webchat::{webchat_routes, ErrorResponse, WebchatHandlers};
use crate::application::{ResetSessionHandler, SendMessageHandler, SessionLocks};
use crate::config::{AppConfig, ServerConfig};
use crate::ports::SessionStore;

/// Builds the router with every endpoint and middleware layer.
///
/// # Routes
/// - `GET /` - Chat widget page
/// - `GET /health` - Liveness
/// - `POST /webchat/message`
/// - `POST /admin/reset_session/:session_id`
pub fn app_router(config: &AppConfig, store: Arc<dyn SessionStore>) -> Router {
    let locks = SessionLocks::new();
    let send_handler = SendMessageHandler::new(store.clone(), locks.clone())
        .with_max_message_length(config.intake.max_message_length);
    let reset_handler = ResetSessionHandler::new(store, locks);
    let handlers = WebchatHandlers::new(
        Arc::new(send_handler),
        Arc::new(reset_handler),
        config.intake.default_practice_name.as_str(),
    );

    Router::new()
        .route("/", get(chat_page))
        .route("/health", get(health))
        .merge(webchat_routes(handlers))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("Internal server error")),
    )
        .into_response()
}
