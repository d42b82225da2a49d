//! ResetSessionHandler - Forgets everything stored for a session.

use std::sync::Arc;

use tracing::info;

use super::error::IntakeError;
use crate::application::SessionLocks;
use crate::domain::foundation::SessionKey;
use crate::ports::SessionStore;

/// Command to reset a session.
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub session_key: SessionKey,
}

/// Handler for session resets.
pub struct ResetSessionHandler {
    store: Arc<dyn SessionStore>,
    locks: SessionLocks,
}

impl ResetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, locks: SessionLocks) -> Self {
        Self { store, locks }
    }

    /// Deletes the stored state. Resetting an unknown session succeeds.
    pub async fn handle(&self, cmd: ResetSessionCommand) -> Result<(), IntakeError> {
        let existed = {
            let lock = self.locks.get(&cmd.session_key);
            let _guard = lock.lock().await;
            self.store.delete(&cmd.session_key).await?
        };
        self.locks.remove_idle(&cmd.session_key);

        info!(session_id = %cmd.session_key, existed, "Session reset");
        Ok(())
    }
}
