//! SendMessageHandler - Runs one caller message through the intake dialogue.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::IntakeError;
use crate::application::SessionLocks;
use crate::domain::foundation::{SessionKey, ValidationError};
use crate::domain::intake::{is_medical_question, DialogueEngine, SessionState};
use crate::ports::SessionStore;

/// Longest accepted caller message, in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 4_000;

/// Command carrying one caller message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub session_key: SessionKey,
    pub user_message: String,
    pub practice_name: String,
    /// State supplied with the request; wins over everything else.
    pub state: Option<SessionState>,
    /// Earlier state echoed back by the client; used when `state` is absent.
    pub prior_state: Option<SessionState>,
}

impl SendMessageCommand {
    pub fn new(
        session_key: SessionKey,
        user_message: impl Into<String>,
        practice_name: impl Into<String>,
    ) -> Self {
        Self {
            session_key,
            user_message: user_message.into(),
            practice_name: practice_name.into(),
            state: None,
            prior_state: None,
        }
    }

    pub fn with_state(mut self, state: SessionState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_prior_state(mut self, state: SessionState) -> Self {
        self.prior_state = Some(state);
        self
    }
}

/// Where the state a turn started from came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSource {
    Request,
    PriorState,
    Stored,
    Fresh,
}

/// Result of a processed message.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub reply: String,
    pub state: SessionState,
    pub state_source: StateSource,
}

/// Handler for caller messages.
pub struct SendMessageHandler {
    store: Arc<dyn SessionStore>,
    locks: SessionLocks,
    engine: DialogueEngine,
    max_message_length: usize,
}

impl SendMessageHandler {
    pub fn new(store: Arc<dyn SessionStore>, locks: SessionLocks) -> Self {
        Self {
            store,
            locks,
            engine: DialogueEngine::new(),
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }

    pub fn with_max_message_length(mut self, max: usize) -> Self {
        self.max_message_length = max;
        self
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, IntakeError> {
        // 1. Validate; a medical question gets the disclaimer at any length
        let length = cmd.user_message.chars().count();
        if length > self.max_message_length && !is_medical_question(&cmd.user_message) {
            return Err(
                ValidationError::too_long("user_message", self.max_message_length, length).into(),
            );
        }

        // 2. Serialize turns of the same session
        let result = {
            let lock = self.locks.get(&cmd.session_key);
            let _guard = lock.lock().await;
            self.run_turn(&cmd).await
        };
        self.locks.remove_idle(&cmd.session_key);

        result
    }

    async fn run_turn(&self, cmd: &SendMessageCommand) -> Result<SendMessageResult, IntakeError> {
        // 3. Resolve the starting state
        let (state, state_source) = self.resolve_state(cmd).await?;
        let step_before = state.step;

        // 4. Run the dialogue
        let outcome = self
            .engine
            .next_reply(&cmd.practice_name, &cmd.user_message, state);

        // 5. Persist
        self.store.put(&cmd.session_key, &outcome.state).await?;

        if outcome.state.step != step_before {
            debug!(
                session_id = %cmd.session_key,
                from = ?step_before,
                to = ?outcome.state.step,
                "Intake step changed"
            );
        }
        if outcome.state.step.is_handoff() && !step_before.is_handoff() {
            info!(session_id = %cmd.session_key, "Contact details complete, ready for handoff");
        }

        Ok(SendMessageResult {
            reply: outcome.reply,
            state: outcome.state,
            state_source,
        })
    }

    /// Request `state`, then `prior_state`, then the stored state, then a
    /// fresh one.
    async fn resolve_state(
        &self,
        cmd: &SendMessageCommand,
    ) -> Result<(SessionState, StateSource), IntakeError> {
        if let Some(state) = &cmd.state {
            return Ok((state.clone(), StateSource::Request));
        }
        if let Some(state) = &cmd.prior_state {
            return Ok((state.clone(), StateSource::PriorState));
        }
        match self.store.get(&cmd.session_key).await? {
            Some(state) => Ok((state, StateSource::Stored)),
            None => Ok((SessionState::new(), StateSource::Fresh)),
        }
    }
}
