//! HTTP handlers for webchat endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::{
    IntakeError, ResetSessionCommand, ResetSessionHandler, SendMessageCommand, SendMessageHandler,
};
use crate::domain::foundation::{SessionKey, ValidationError};

use super::dto::{ErrorResponse, IncomingMessage, OutgoingMessage, ResetSessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WebchatHandlers {
    send_handler: Arc<SendMessageHandler>,
    reset_handler: Arc<ResetSessionHandler>,
    default_practice_name: Arc<str>,
}

impl WebchatHandlers {
    pub fn new(
        send_handler: Arc<SendMessageHandler>,
        reset_handler: Arc<ResetSessionHandler>,
        default_practice_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            send_handler,
            reset_handler,
            default_practice_name: default_practice_name.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /webchat/message - Process one caller message
pub async fn send_message(
    State(handlers): State<WebchatHandlers>,
    payload: Result<Json<IncomingMessage>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return handle_rejection(rejection),
    };

    let session_key = match SessionKey::new(req.session_id.clone()) {
        Ok(key) => key,
        Err(e) => return handle_intake_error(e.into()),
    };

    let practice_name = req
        .practice_name
        .unwrap_or_else(|| handlers.default_practice_name.to_string());

    let mut cmd =
        SendMessageCommand::new(session_key, req.user_message.clone(), practice_name.clone());
    cmd.state = req.state;
    cmd.prior_state = req.prior_state;

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => {
            let response = OutgoingMessage {
                session_id: req.session_id,
                channel: req.channel,
                practice_name,
                user_message: req.user_message,
                reply: result.reply,
                state: result.state,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_intake_error(e),
    }
}

/// POST /admin/reset_session/:session_id - Forget a session
pub async fn reset_session(
    State(handlers): State<WebchatHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_key = match SessionKey::new(session_id.clone()) {
        Ok(key) => key,
        Err(e) => return handle_intake_error(e.into()),
    };

    match handlers
        .reset_handler
        .handle(ResetSessionCommand { session_key })
        .await
    {
        Ok(_) => {
            let response = ResetSessionResponse {
                ok: true,
                session_id,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_intake_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_rejection(rejection: JsonRejection) -> Response {
    warn!(
        status = %rejection.status(),
        reason = %rejection.body_text(),
        "Rejected webchat payload"
    );
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::invalid_request(
            "Request body is not a valid webchat message",
        )),
    )
        .into_response()
}

fn handle_intake_error(error: IntakeError) -> Response {
    match error {
        IntakeError::Validation(e) => validation_response(e),
        IntakeError::Store(e) => {
            error!(error = %e, "Session store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

fn validation_response(error: ValidationError) -> Response {
    let field = error.field().to_string();
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(error.to_string()).with_details(json!({ "field": field }))),
    )
        .into_response()
}
