use serde::Serialize;

use crate::domain::rules::round_award;
use crate::domain::state::{RoundStatus, Session};
use crate::errors::domain::{DomainError, StateKind};

/// What a finished round amounts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub won: bool,
    /// The secret word, always disclosed once the round is over.
    pub revealed_word: String,
    /// Score after the award on a win; the score being recorded on a loss.
    pub final_score: u32,
    /// Points added to the score by this call: the win award the first
    /// time a won round is concluded, zero afterwards and on a loss.
    pub award: u32,
    pub lives_remaining: u8,
}

/// Add the win award to the score once per round.
///
/// Returns the award applied by this call (zero if already applied or if
/// the round is not won).
pub fn settle_win(session: &mut Session) -> u32 {
    if session.status != RoundStatus::Won || session.awarded {
        return 0;
    }
    let award = round_award(session.lives);
    session.score += award;
    session.awarded = true;
    award
}

/// Close out a finished round.
///
/// A won round is settled (award added once). A lost round leaves the
/// score untouched so the caller can record it before resetting.
pub fn conclude_round(session: &mut Session) -> Result<RoundOutcome, DomainError> {
    match session.status {
        RoundStatus::Active => Err(DomainError::state(
            StateKind::RoundInProgress,
            format!("round {} is still being played", session.round),
        )),
        RoundStatus::Won => {
            let award = settle_win(session);
            Ok(RoundOutcome {
                won: true,
                revealed_word: session.secret.clone(),
                final_score: session.score,
                award,
                lives_remaining: session.lives,
            })
        }
        RoundStatus::Lost => Ok(RoundOutcome {
            won: false,
            revealed_word: session.secret.clone(),
            final_score: session.score,
            award: 0,
            lives_remaining: 0,
        }),
    }
}
