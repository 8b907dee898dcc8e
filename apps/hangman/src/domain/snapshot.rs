//! Read-only view of a session for rendering.

use serde::Serialize;

use crate::domain::rules::STARTING_LIVES;
use crate::domain::state::{Session, SessionPhase};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub nickname: String,
    pub phase: SessionPhase,
    pub round: u32,
    /// Space-separated pattern with `_` for hidden cells.
    pub pattern: String,
    pub word_length: usize,
    /// Tried letters in alphabetical order.
    pub tried_letters: Vec<char>,
    pub lives: u8,
    pub max_lives: u8,
    pub score: u32,
    /// Disclosed only once the round is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

/// Produce the public view of a session.
pub fn snapshot(session: &Session) -> SessionView {
    SessionView {
        nickname: session.nickname.clone(),
        phase: session.status.into(),
        round: session.round,
        pattern: session.pattern.render(),
        word_length: session.pattern.len(),
        tried_letters: session.tried_letters.iter().copied().collect(),
        lives: session.lives,
        max_lives: STARTING_LIVES,
        score: session.score,
        word: (!session.is_active()).then(|| session.secret.clone()),
    }
}
