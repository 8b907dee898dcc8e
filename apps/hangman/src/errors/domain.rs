//! Domain-level error type used across the game engine.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a guess (or other player input) was rejected without changing state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Nothing left after trimming.
    EmptyGuess,
    /// Single character outside `a`-`z`.
    NotALetter,
    /// Letter already tried this round.
    LetterAlreadyTried,
    /// A word source was built from an empty list.
    EmptyWordList,
}

/// Operation attempted in a session state that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    /// No session exists for the key.
    NoSession,
    /// The round is already won or lost; no more guesses.
    RoundOver,
    /// The round is still being played; it cannot be finalized yet.
    RoundInProgress,
    /// The round is lost; only finalization is allowed.
    GameOver,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed or repeated player input
    Validation(ValidationKind, String),
    /// Operation not valid in the current session state
    State(StateKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::State(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::State(kind, detail.into())
    }

    pub fn no_session() -> Self {
        Self::state(StateKind::NoSession, "no active session")
    }

    /// True for rejected player input, which the web layer ignores silently.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }

    pub fn state_kind(&self) -> Option<StateKind> {
        match self {
            DomainError::State(kind, _) => Some(*kind),
            DomainError::Validation(..) => None,
        }
    }
}
