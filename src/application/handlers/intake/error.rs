//! Errors surfaced by intake handlers.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::SessionStoreError;

/// Errors that can occur while handling an intake command.
///
/// The dialogue itself cannot fail; only input validation and the session
/// store can.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Invalid command: {0}")]
    Validation(#[from] ValidationError),

    #[error("Session storage failed: {0}")]
    Store(#[from] SessionStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts() {
        let err: IntakeError = ValidationError::empty_field("session_id").into();
        assert!(matches!(err, IntakeError::Validation(_)));
        assert!(err.to_string().contains("session_id"));
    }

    #[test]
    fn store_error_converts() {
        let err: IntakeError = SessionStoreError::Unavailable("down".to_string()).into();
        assert!(matches!(err, IntakeError::Store(_)));
    }
}
