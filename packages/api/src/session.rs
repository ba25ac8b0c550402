//! # Session: the persisted authentication state
//!
//! [`Session`] owns the two well-known storage keys (bearer token and
//! JSON-serialized [`User`] snapshot) behind a [`store::StorageBackend`].
//! It is created once at startup, injected into the HTTP client and the
//! auth service, and cloned freely; clones share the same backend and
//! listener list.
//!
//! Presence of both keys is the sole authentication gate. The session is
//! destroyed either by an explicit logout or by any authorized call that
//! receives a 401; both paths go through [`Session::clear`], which removes
//! the keys and then notifies subscribers with a [`SessionEvent`]. The
//! presentation layer reacts to that event by redirecting to the login
//! view. The data layer itself never navigates.
//!
//! Concurrent clears are harmless: removals are idempotent and
//! last-write-wins, so a 401 racing a user-initiated logout converges on
//! "cleared".

use std::sync::{Arc, Mutex};

use futures_channel::mpsc;
use store::StorageBackend;

use crate::config::ApiConfig;
use crate::models::User;

/// Why the session ended. Delivered to subscribers after the storage keys
/// have been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// An authorized call received a 401 from the backend.
    Expired,
    /// The user logged out locally.
    LoggedOut,
}

struct Inner {
    backend: Arc<dyn StorageBackend>,
    token_key: String,
    user_key: String,
    listeners: Mutex<Vec<mpsc::UnboundedSender<SessionEvent>>>,
}

/// Handle to the persisted session. Cheap to clone; all clones share state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    pub fn new(config: &ApiConfig, backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                token_key: config.token_key.clone(),
                user_key: config.user_key.clone(),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Persist a freshly authenticated session: the raw token plus the user
    /// snapshot as JSON.
    pub fn store(&self, token: &str, user: &User) {
        self.inner.backend.set(&self.inner.token_key, token);
        match serde_json::to_string(user) {
            Ok(json) => self.inner.backend.set(&self.inner.user_key, &json),
            Err(e) => tracing::warn!("failed to serialize user snapshot: {e}"),
        }
    }

    /// Raw accessor for the persisted bearer token.
    pub fn token(&self) -> Option<String> {
        self.inner.backend.get(&self.inner.token_key)
    }

    /// The persisted user snapshot. Returns `None` when the key is absent
    /// or the stored JSON is malformed; corruption degrades to "logged
    /// out" rather than an error.
    pub fn current_user(&self) -> Option<User> {
        let json = self.inner.backend.get(&self.inner.user_key)?;
        serde_json::from_str(&json).ok()
    }

    /// True iff both a token and a parseable user snapshot are present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.current_user().is_some()
    }

    /// Remove both session keys, then notify subscribers why.
    pub fn clear(&self, event: SessionEvent) {
        self.inner.backend.remove(&self.inner.token_key);
        self.inner.backend.remove(&self.inner.user_key);
        tracing::debug!(?event, "session cleared");
        self.emit(event);
    }

    /// Subscribe to session lifecycle events. Each subscriber gets its own
    /// unbounded receiver; dropped receivers are pruned on the next emit.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded();
        self.inner.listeners.lock().unwrap().push(tx);
        rx
    }

    fn emit(&self, event: SessionEvent) {
        self.inner
            .listeners
            .lock()
            .unwrap()
            .retain(|tx| tx.unbounded_send(event).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryBackend;

    fn session(backend: MemoryBackend) -> Session {
        Session::new(&ApiConfig::new("http://localhost:3000"), Arc::new(backend))
    }

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn store_persists_both_keys() {
        let backend = MemoryBackend::new();
        let session = self::session(backend.clone());

        session.store("T1", &user());

        assert_eq!(backend.get("vetdesk_token").as_deref(), Some("T1"));
        assert!(backend.get("vetdesk_user").unwrap().contains("u1"));
        assert_eq!(session.token().as_deref(), Some("T1"));
        assert_eq!(session.current_user().unwrap().id, "u1");
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_removes_both_keys() {
        let backend = MemoryBackend::new();
        let session = self::session(backend.clone());

        session.store("T1", &user());
        session.clear(SessionEvent::LoggedOut);

        assert!(backend.get("vetdesk_token").is_none());
        assert!(backend.get("vetdesk_user").is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn malformed_user_snapshot_reads_as_none() {
        let backend = MemoryBackend::new();
        backend.set("vetdesk_token", "T1");
        backend.set("vetdesk_user", "{not json");

        let session = self::session(backend);
        assert!(session.current_user().is_none());
        // Token alone does not make the session authenticated.
        assert!(!session.is_authenticated());
    }

    #[test]
    fn subscribers_receive_clear_events() {
        let session = self::session(MemoryBackend::new());
        let mut rx = session.subscribe();

        session.clear(SessionEvent::Expired);
        assert_eq!(rx.try_next().unwrap(), Some(SessionEvent::Expired));

        session.clear(SessionEvent::LoggedOut);
        assert_eq!(rx.try_next().unwrap(), Some(SessionEvent::LoggedOut));
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let session = self::session(MemoryBackend::new());
        drop(session.subscribe());

        // Must not fail or leak; the dead sender is dropped on emit.
        session.clear(SessionEvent::LoggedOut);

        let mut rx = session.subscribe();
        session.clear(SessionEvent::LoggedOut);
        assert_eq!(rx.try_next().unwrap(), Some(SessionEvent::LoggedOut));
    }
}
