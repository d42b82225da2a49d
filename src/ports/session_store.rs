//! Session Store Port - Interface for keeping intake state between turns.

use async_trait::async_trait;

use crate::domain::foundation::SessionKey;
use crate::domain::intake::SessionState;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for storing session state by key.
///
/// Implementations only guarantee that single calls are atomic. Callers
/// that read, modify and write back a state must serialize per key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the state for a session
    ///
    /// # Returns
    /// `None` if the session has never been stored or was reset
    async fn get(&self, key: &SessionKey) -> Result<Option<SessionState>, SessionStoreError>;

    /// Store the state for a session, replacing any previous state
    async fn put(&self, key: &SessionKey, state: &SessionState) -> Result<(), SessionStoreError>;

    /// Forget a session
    ///
    /// Deleting an unknown session is not an error.
    ///
    /// # Returns
    /// `true` if a stored state was removed
    async fn delete(&self, key: &SessionKey) -> Result<bool, SessionStoreError>;
}
