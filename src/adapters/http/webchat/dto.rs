//! HTTP DTOs for webchat endpoints.
//!
//! Field names follow the widget's existing snake_case envelope, which
//! clients echo back verbatim between turns.

use serde::{Deserialize, Serialize};

use crate::domain::intake::SessionState;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One caller message from the widget.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub session_id: String,
    pub user_message: String,
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Falls back to the configured practice name.
    #[serde(default)]
    pub practice_name: Option<String>,
    #[serde(default)]
    pub prior_state: Option<SessionState>,
    /// Legacy duplicate of `user_message`; accepted and ignored.
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub state: Option<SessionState>,
}

fn default_channel() -> String {
    "webchat".to_string()
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The request envelope echoed back with the reply and post-turn state.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessage {
    pub session_id: String,
    pub channel: String,
    pub practice_name: String,
    pub user_message: String,
    pub reply: String,
    pub state: SessionState,
}

/// Response for a session reset.
#[derive(Debug, Clone, Serialize)]
pub struct ResetSessionResponse {
    pub ok: bool,
    pub session_id: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: "INVALID_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
