//! Domain layer: pure game logic types and helpers.

pub mod guess;
pub mod pattern;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod words;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_guess;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use guess::Proposal;
pub use pattern::RevealedPattern;
pub use rules::{round_award, PLACEHOLDER, POINTS_PER_LIFE, STARTING_LIVES};
pub use scoring::{conclude_round, settle_win, RoundOutcome};
pub use snapshot::{snapshot, SessionView};
pub use state::{GuessOutcome, RoundStatus, Session, SessionPhase};
pub use words::{RandomWords, ScriptedWords, WordSource, WORDS};
