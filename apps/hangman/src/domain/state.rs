use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::guess::Proposal;
use crate::domain::pattern::RevealedPattern;
use crate::domain::rules::STARTING_LIVES;
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

/// Where the current round stands.
///
/// "No session" is not a variant: it is the absence of a [`Session`] in
/// the session store (see [`SessionPhase`]).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    /// Guesses are being accepted.
    Active,
    /// Every cell is revealed.
    Won,
    /// Lives reached zero with cells still hidden.
    Lost,
}

/// Session lifecycle as seen from outside the store.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    None,
    Active,
    Won,
    Lost,
}

impl From<RoundStatus> for SessionPhase {
    fn from(status: RoundStatus) -> Self {
        match status {
            RoundStatus::Active => SessionPhase::Active,
            RoundStatus::Won => SessionPhase::Won,
            RoundStatus::Lost => SessionPhase::Lost,
        }
    }
}

/// Result of a single accepted guess.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// Letter present; `revealed` cells were uncovered.
    Hit { revealed: usize },
    /// Letter absent; one life lost.
    Miss,
    /// Whole-word guess did not match; one life lost.
    WrongWord,
    /// The guess completed the word.
    Solved,
}

/// One player's game: the current round plus what carries across rounds.
#[derive(Debug, Clone)]
pub struct Session {
    /// Set once at creation; kept across rounds.
    pub nickname: String,
    /// Secret word for the current round.
    pub secret: String,
    pub pattern: RevealedPattern,
    pub tried_letters: BTreeSet<char>,
    /// In `0..=STARTING_LIVES`.
    pub lives: u8,
    /// Accumulated over won rounds.
    pub score: u32,
    /// 1-based round counter.
    pub round: u32,
    pub status: RoundStatus,
    /// Whether the current won round's award is already in `score`.
    pub awarded: bool,
}

impl Session {
    pub fn new(nickname: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            nickname: nickname.into(),
            pattern: RevealedPattern::hidden(&secret),
            secret,
            tried_letters: BTreeSet::new(),
            lives: STARTING_LIVES,
            score: 0,
            round: 1,
            status: RoundStatus::Active,
            awarded: false,
        }
    }

    /// Lives left and at least one hidden cell.
    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }

    /// Resolve one guess against the current round.
    ///
    /// Rejected input (repeated letter) leaves the session untouched.
    pub fn apply_guess(&mut self, proposal: &Proposal) -> Result<GuessOutcome, DomainError> {
        if !self.is_active() {
            return Err(DomainError::state(
                StateKind::RoundOver,
                format!("round {} is already {:?}", self.round, self.status),
            ));
        }

        let outcome = match proposal {
            Proposal::Word(word) => {
                if *word == self.secret {
                    self.pattern.reveal_all(&self.secret);
                    GuessOutcome::Solved
                } else {
                    self.lose_life();
                    GuessOutcome::WrongWord
                }
            }
            Proposal::Letter(letter) => {
                if self.tried_letters.contains(letter) {
                    return Err(DomainError::validation(
                        ValidationKind::LetterAlreadyTried,
                        format!("'{letter}' was already tried"),
                    ));
                }
                self.tried_letters.insert(*letter);
                let revealed = self.pattern.reveal_letter(&self.secret, *letter);
                if revealed > 0 {
                    if self.pattern.is_complete() {
                        GuessOutcome::Solved
                    } else {
                        GuessOutcome::Hit { revealed }
                    }
                } else {
                    self.lose_life();
                    GuessOutcome::Miss
                }
            }
        };

        self.refresh_status();
        Ok(outcome)
    }

    /// Load a new secret word, keeping nickname and score.
    pub fn next_round(&mut self, secret: impl Into<String>) {
        self.secret = secret.into();
        self.pattern = RevealedPattern::hidden(&self.secret);
        self.tried_letters.clear();
        self.lives = STARTING_LIVES;
        self.round += 1;
        self.status = RoundStatus::Active;
        self.awarded = false;
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    fn refresh_status(&mut self) {
        self.status = if self.pattern.is_complete() {
            RoundStatus::Won
        } else if self.lives == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::Active
        };
    }
}
