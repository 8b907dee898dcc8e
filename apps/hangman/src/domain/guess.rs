//! Parsing raw player input into a guess.

use crate::errors::domain::{DomainError, ValidationKind};

/// A normalized guess: one letter, or a whole-word attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    Letter(char),
    Word(String),
}

impl Proposal {
    /// Normalize raw input (trim, lowercase) and classify it.
    ///
    /// Anything longer than one character is a whole-word guess and is
    /// accepted as-is. A single character must be `a`-`z`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();
        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(DomainError::validation(
                ValidationKind::EmptyGuess,
                "guess is empty",
            )),
            (Some(c), None) if c.is_ascii_lowercase() => Ok(Proposal::Letter(c)),
            (Some(c), None) => Err(DomainError::validation(
                ValidationKind::NotALetter,
                format!("'{c}' is not a letter between a and z"),
            )),
            (Some(_), Some(_)) => Ok(Proposal::Word(normalized)),
        }
    }
}
