//! Observable session store.
//!
//! Holds the authenticated session derived from the persisted `token` and
//! `role` keys and publishes typed state changes on its own watch channel,
//! so interested views resynchronize without a shared generic event.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tiendita::users::Role;
use tokio::sync::watch;

use crate::{
    auth::models::{Session, SessionToken},
    storage::{ROLE_KEY, Storage, StorageError, TOKEN_KEY},
};

/// Session state published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    SignedIn { role: Role },
}

/// Typed store over the persisted session.
#[derive(Debug)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    current: Mutex<Option<Session>>,
    tx: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Rebuild the session from the persisted keys, if both are present and
    /// the token is non-empty.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let restored = restore(storage.as_ref());
        let (tx, _rx) = watch::channel(state_of(restored.as_ref()));

        Self {
            storage,
            current: Mutex::new(restored),
            tx,
        }
    }

    /// Persist a freshly authenticated session and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be persisted.
    pub fn establish(&self, session: Session) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, session.token.as_str())?;
        self.storage.set(ROLE_KEY, session.role.as_str())?;

        let state = SessionState::SignedIn { role: session.role };

        *self.lock() = Some(session);

        self.tx.send_replace(state);

        Ok(())
    }

    /// Drop the session and its persisted keys, notifying subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error when the persisted keys cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(ROLE_KEY)?;

        *self.lock() = None;

        self.tx.send_replace(SessionState::SignedOut);

        Ok(())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.lock().as_ref().map(|session| session.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    /// Subscribe to session state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn restore(storage: &dyn Storage) -> Option<Session> {
    let token = storage.get(TOKEN_KEY)?;

    if token.is_empty() {
        return None;
    }

    let role: Role = storage.get(ROLE_KEY)?.parse().ok()?;

    Some(Session {
        token: SessionToken::new(token),
        role,
    })
}

fn state_of(session: Option<&Session>) -> SessionState {
    session.map_or(SessionState::SignedOut, |session| SessionState::SignedIn {
        role: session.role,
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::storage::MemoryStorage;

    use super::*;

    fn session(token: &str, role: Role) -> Session {
        Session {
            token: SessionToken::new(token.to_string()),
            role,
        }
    }

    #[test]
    fn establish_persists_token_and_role() -> TestResult {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = SessionStore::open(Arc::clone(&storage));

        store.establish(session("abc123", Role::Client))?;

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("client"));
        assert!(store.is_authenticated());
        assert_eq!(store.role(), Some(Role::Client));

        Ok(())
    }

    #[test]
    fn open_restores_a_persisted_session() -> TestResult {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        storage.set(TOKEN_KEY, "abc123")?;
        storage.set(ROLE_KEY, "operator")?;

        let store = SessionStore::open(Arc::clone(&storage));

        assert_eq!(store.role(), Some(Role::Operator));

        Ok(())
    }

    #[test]
    fn open_ignores_an_empty_token() -> TestResult {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        storage.set(TOKEN_KEY, "")?;
        storage.set(ROLE_KEY, "client")?;

        let store = SessionStore::open(Arc::clone(&storage));

        assert!(!store.is_authenticated());

        Ok(())
    }

    #[test]
    fn open_ignores_an_unknown_persisted_role() -> TestResult {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        storage.set(TOKEN_KEY, "abc123")?;
        storage.set(ROLE_KEY, "admin")?;

        let store = SessionStore::open(Arc::clone(&storage));

        assert!(!store.is_authenticated());

        Ok(())
    }

    #[test]
    fn clear_removes_the_persisted_keys() -> TestResult {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = SessionStore::open(Arc::clone(&storage));

        store.establish(session("abc123", Role::Client))?;
        store.clear()?;

        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(ROLE_KEY), None);
        assert!(!store.is_authenticated());

        Ok(())
    }

    #[tokio::test]
    async fn subscribers_see_typed_state_changes() -> TestResult {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = SessionStore::open(storage);

        let mut rx = store.subscribe();

        assert_eq!(*rx.borrow(), SessionState::SignedOut);

        store.establish(session("abc123", Role::Operator))?;

        rx.changed().await?;

        assert_eq!(
            *rx.borrow(),
            SessionState::SignedIn {
                role: Role::Operator
            }
        );

        store.clear()?;

        rx.changed().await?;

        assert_eq!(*rx.borrow(), SessionState::SignedOut);

        Ok(())
    }
}
