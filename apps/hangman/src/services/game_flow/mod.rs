//! Game session engine: bridges pure domain rules with the session store,
//! the word source and the leaderboard.
//!
//! Every operation takes the [`SessionKey`] it acts on and performs its
//! read-modify-write under the session store lock. Lock order is session
//! store first, leaderboard second.

mod player_actions;
mod round_lifecycle;

use std::sync::Arc;

use serde::Serialize;

use crate::domain::snapshot::SessionView;
use crate::domain::state::{GuessOutcome, SessionPhase};
use crate::domain::words::{RandomWords, WordSource};
use crate::repos::leaderboard::LeaderboardStore;
use crate::services::sessions::{SessionKey, SessionStore};

/// An accepted guess and the session it left behind.
#[derive(Debug, Clone, Serialize)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub session: SessionView,
}

pub struct GameFlowService {
    sessions: SessionStore,
    words: Arc<dyn WordSource>,
    leaderboard: Arc<LeaderboardStore>,
}

impl GameFlowService {
    pub fn new(words: Arc<dyn WordSource>, leaderboard: Arc<LeaderboardStore>) -> Self {
        Self {
            sessions: SessionStore::new(),
            words,
            leaderboard,
        }
    }

    /// Built-in word list with OS-seeded randomness.
    pub fn with_builtin_words(leaderboard: Arc<LeaderboardStore>) -> Self {
        Self::new(Arc::new(RandomWords::builtin()), leaderboard)
    }

    pub fn leaderboard(&self) -> &LeaderboardStore {
        &self.leaderboard
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn phase(&self, key: SessionKey) -> SessionPhase {
        self.sessions.phase(key)
    }
}

impl std::fmt::Debug for GameFlowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameFlowService")
            .field("sessions", &self.sessions.len())
            .field("leaderboard", &self.leaderboard.len())
            .finish()
    }
}
