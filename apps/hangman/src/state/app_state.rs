use std::sync::Arc;

use crate::repos::leaderboard::LeaderboardStore;
use crate::services::game_flow::GameFlowService;

/// Shared handles for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub game: Arc<GameFlowService>,
}

impl AppState {
    pub fn new(game: GameFlowService) -> Self {
        Self {
            game: Arc::new(game),
        }
    }

    pub fn game(&self) -> &GameFlowService {
        &self.game
    }

    pub fn leaderboard(&self) -> &LeaderboardStore {
        self.game.leaderboard()
    }

    /// Built-in words and a leaderboard that never touches disk.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(GameFlowService::with_builtin_words(Arc::new(
            LeaderboardStore::in_memory(),
        )))
    }
}
