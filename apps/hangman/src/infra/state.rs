use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::words::{RandomWords, WordSource, WORDS};
use crate::error::AppError;
use crate::repos::leaderboard::LeaderboardStore;
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    leaderboard_path: Option<PathBuf>,
    words: Option<Arc<dyn WordSource>>,
    word_seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            leaderboard_path: None,
            words: None,
            word_seed: None,
        }
    }

    /// Persist the leaderboard at `path`. Without it the leaderboard lives
    /// in memory only.
    pub fn with_leaderboard_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.leaderboard_path = Some(path.into());
        self
    }

    pub fn with_words(mut self, words: Arc<dyn WordSource>) -> Self {
        self.words = Some(words);
        self
    }

    /// Seed the built-in random word source. Ignored when
    /// [`with_words`](Self::with_words) is used.
    pub fn with_word_seed(mut self, seed: u64) -> Self {
        self.word_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let leaderboard = match self.leaderboard_path {
            Some(path) => {
                let store = LeaderboardStore::load(path);
                info!(entries = store.len(), path = ?store.path(), "leaderboard_loaded");
                store
            }
            None => LeaderboardStore::in_memory(),
        };

        let words: Arc<dyn WordSource> = match (self.words, self.word_seed) {
            (Some(words), _) => words,
            (None, Some(seed)) => Arc::new(RandomWords::new(WORDS.iter().copied(), Some(seed))?),
            (None, None) => Arc::new(RandomWords::builtin()),
        };

        Ok(AppState::new(GameFlowService::new(
            words,
            Arc::new(leaderboard),
        )))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
