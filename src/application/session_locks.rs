//! Per-session locks.
//!
//! A turn reads the stored state, runs the engine and writes the result
//! back. Two turns for the same session must not interleave, while turns
//! for different sessions run freely.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::SessionKey;

/// Lazily created async mutex per session key.
///
/// ```ignore
/// let lock = locks.get(&key);
/// let _guard = lock.lock().await;
/// // load, run the engine, save
/// ```
#[derive(Clone, Default)]
pub struct SessionLocks {
    locks: Arc<DashMap<SessionKey, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the lock for `key`.
    pub fn get(&self, key: &SessionKey) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the entry for `key` if nobody holds or waits on it.
    ///
    /// Returns true if the entry was removed.
    pub fn remove_idle(&self, key: &SessionKey) -> bool {
        self.locks
            .remove_if(key, |_, lock| Arc::strong_count(lock) == 1)
            .is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn key(value: &str) -> SessionKey {
        SessionKey::new(value).unwrap()
    }

    #[test]
    fn same_key_returns_same_lock() {
        let locks = SessionLocks::new();
        let a = locks.get(&key("a"));
        let b = locks.get(&key("a"));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!locks.is_empty());
    }

    #[test]
    fn different_keys_get_different_locks() {
        let locks = SessionLocks::new();
        let a = locks.get(&key("a"));
        let b = locks.get(&key("b"));
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn remove_idle_skips_held_locks() {
        let locks = SessionLocks::new();
        let held = locks.get(&key("a"));

        assert!(!locks.remove_idle(&key("a")));
        drop(held);
        assert!(locks.remove_idle(&key("a")));
        assert!(locks.is_empty());
    }

    #[test]
    fn remove_idle_on_unknown_key_is_noop() {
        let locks = SessionLocks::new();
        assert!(!locks.remove_idle(&key("missing")));
    }

    #[tokio::test]
    async fn same_key_serializes() {
        let locks = SessionLocks::new();
        let lock = locks.get(&key("a"));
        let guard = lock.lock().await;

        let other = locks.get(&key("a"));
        let waiting = tokio::time::timeout(Duration::from_millis(20), other.lock()).await;
        assert!(waiting.is_err(), "second turn must wait for the first");

        drop(guard);
        assert!(other.try_lock().is_ok());
    }
}
