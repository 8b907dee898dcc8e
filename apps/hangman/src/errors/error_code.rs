//! Error codes for the hangman API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Guess was empty after trimming
    EmptyGuess,
    /// Single-character guess outside a-z
    NotALetter,
    /// Letter was already tried this round
    LetterAlreadyTried,
    /// Request body could not be read as a form
    BadRequest,

    // Session State
    /// No session has been started
    NoSession,
    /// Round already won or lost
    RoundOver,
    /// Round still in progress
    RoundInProgress,
    /// Round lost; session must be finalized
    GameOver,

    // Resource Not Found
    /// No route matches the request path
    NotFound,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyGuess => "EMPTY_GUESS",
            Self::NotALetter => "NOT_A_LETTER",
            Self::LetterAlreadyTried => "LETTER_ALREADY_TRIED",
            Self::BadRequest => "BAD_REQUEST",

            Self::NoSession => "NO_SESSION",
            Self::RoundOver => "ROUND_OVER",
            Self::RoundInProgress => "ROUND_IN_PROGRESS",
            Self::GameOver => "GAME_OVER",

            Self::NotFound => "NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
