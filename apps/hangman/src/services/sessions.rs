//! Keyed, lock-guarded session storage.
//!
//! The web layer only ever uses [`SessionKey::DEFAULT`], which keeps the
//! game single-player: starting a session replaces whatever was there.
//! Distinct keys are independent sessions.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::state::{Session, SessionPhase};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey(pub u64);

impl SessionKey {
    pub const DEFAULT: SessionKey = SessionKey(0);
}

impl Default for SessionKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionKey, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `session` under `key`, returning the one it replaced.
    pub fn insert(&self, key: SessionKey, session: Session) -> Option<Session> {
        self.sessions.lock().insert(key, session)
    }

    pub fn get(&self, key: SessionKey) -> Option<Session> {
        self.sessions.lock().get(&key).cloned()
    }

    pub fn remove(&self, key: SessionKey) -> Option<Session> {
        self.sessions.lock().remove(&key)
    }

    pub fn phase(&self, key: SessionKey) -> SessionPhase {
        self.sessions
            .lock()
            .get(&key)
            .map_or(SessionPhase::None, |s| s.status.into())
    }

    /// Run `f` on the slot for `key` while holding the lock.
    ///
    /// `f` may fill, mutate or empty the slot; whatever it leaves behind is
    /// what the store holds afterwards.
    pub fn with_slot<R>(&self, key: SessionKey, f: impl FnOnce(&mut Option<Session>) -> R) -> R {
        let mut sessions = self.sessions.lock();
        let mut slot = sessions.remove(&key);
        let out = f(&mut slot);
        if let Some(session) = slot {
            sessions.insert(key, session);
        }
        out
    }

    /// Exclusive read-modify-write on an existing session.
    pub fn with_session_mut<R>(
        &self,
        key: SessionKey,
        f: impl FnOnce(&mut Session) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        self.with_slot(key, |slot| match slot {
            Some(session) => f(session),
            None => Err(DomainError::no_session()),
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}
