//! In-Memory Session Store Adapter
//!
//! Session state lives in a map guarded by an async RwLock and disappears
//! with the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionKey;
use crate::domain::intake::SessionState;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for session state
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    states: Arc<RwLock<HashMap<SessionKey, SessionState>>>,
}

impl InMemorySessionStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held
    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }

    /// True when no session is held
    pub async fn is_empty(&self) -> bool {
        self.states.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<SessionState>, SessionStoreError> {
        Ok(self.states.read().await.get(key).cloned())
    }

    async fn put(&self, key: &SessionKey, state: &SessionState) -> Result<(), SessionStoreError> {
        self.states.write().await.insert(key.clone(), state.clone());
        Ok(())
    }

    async fn delete(&self, key: &SessionKey) -> Result<bool, SessionStoreError> {
        Ok(self.states.write().await.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::Step;

    fn key(value: &str) -> SessionKey {
        SessionKey::new(value).unwrap()
    }

    #[tokio::test]
    async fn get_unknown_session_returns_none() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get(&key("nobody")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get_returns_state() {
        let store = InMemorySessionStore::new();
        let state = SessionState {
            step: Step::CollectContact,
            ..Default::default()
        };

        store.put(&key("a"), &state).await.unwrap();

        assert_eq!(store.get(&key("a")).await.unwrap(), Some(state));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn put_replaces_previous_state() {
        let store = InMemorySessionStore::new();
        store.put(&key("a"), &SessionState::new()).await.unwrap();

        let handed_off = SessionState {
            step: Step::Handoff,
            ..Default::default()
        };
        store.put(&key("a"), &handed_off).await.unwrap();

        assert_eq!(store.get(&key("a")).await.unwrap(), Some(handed_off));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        store.put(&key("a"), &SessionState::new()).await.unwrap();

        assert_eq!(store.get(&key("b")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.put(&key("a"), &SessionState::new()).await.unwrap();

        assert!(store.delete(&key("a")).await.unwrap());
        assert!(!store.delete(&key("a")).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let store = InMemorySessionStore::new();
        let other = store.clone();
        store.put(&key("a"), &SessionState::new()).await.unwrap();

        assert!(other.get(&key("a")).await.unwrap().is_some());
    }
}
