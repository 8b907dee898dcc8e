use crate::domain::guess::Proposal;
use crate::domain::state::{GuessOutcome, Session};
use crate::errors::domain::DomainError;

pub fn session_with_word(secret: &str) -> Session {
    Session::new("tester", secret)
}

/// Parse and apply a raw guess in one step.
pub fn guess(session: &mut Session, raw: &str) -> Result<GuessOutcome, DomainError> {
    let proposal = Proposal::parse(raw)?;
    session.apply_guess(&proposal)
}

/// Apply each letter of `letters` in order, panicking on rejection.
pub fn guess_all(session: &mut Session, letters: &str) -> Vec<GuessOutcome> {
    letters
        .chars()
        .map(|c| guess(session, &c.to_string()).expect("guess should be accepted"))
        .collect()
}
