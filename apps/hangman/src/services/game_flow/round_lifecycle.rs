use tracing::{debug, info, warn};

use super::GameFlowService;
use crate::domain::scoring::{conclude_round, settle_win, RoundOutcome};
use crate::domain::snapshot::{snapshot, SessionView};
use crate::domain::state::RoundStatus;
use crate::errors::domain::{DomainError, StateKind};
use crate::repos::leaderboard::LeaderboardEntry;
use crate::services::sessions::SessionKey;

impl GameFlowService {
    /// Whether the round under `key` still accepts guesses.
    pub fn is_active(&self, key: SessionKey) -> Result<bool, DomainError> {
        self.sessions
            .get(key)
            .map(|s| s.is_active())
            .ok_or_else(DomainError::no_session)
    }

    pub fn snapshot(&self, key: SessionKey) -> Result<SessionView, DomainError> {
        self.sessions
            .get(key)
            .map(|s| snapshot(&s))
            .ok_or_else(DomainError::no_session)
    }

    /// Close out a finished round.
    ///
    /// - Won: the award is added to the score once; the session stays open
    ///   for [`continue_round`](Self::continue_round).
    /// - Lost: the current score is recorded on the leaderboard, then reset,
    ///   and the session is removed.
    ///
    /// A leaderboard write failure is logged and does not fail the call.
    pub fn finalize(&self, key: SessionKey) -> Result<RoundOutcome, DomainError> {
        self.sessions.with_slot(key, |slot| {
            let session = slot.as_mut().ok_or_else(DomainError::no_session)?;
            let outcome = conclude_round(session)?;

            if outcome.won {
                info!(
                    nickname = %session.nickname,
                    round = session.round,
                    award = outcome.award,
                    score = outcome.final_score,
                    "round_won"
                );
                return Ok(outcome);
            }

            let entry = LeaderboardEntry::new(session.nickname.clone(), outcome.final_score);
            if let Err(err) = self.leaderboard.append(entry) {
                warn!(error = %err, "leaderboard_write_failed");
            }
            session.score = 0;
            info!(
                nickname = %session.nickname,
                round = session.round,
                score = outcome.final_score,
                "session_lost"
            );
            *slot = None;
            Ok(outcome)
        })
    }

    /// Load a new secret word into the session, keeping nickname and score.
    ///
    /// A won round that was not finalized yet is settled first so its award
    /// is not lost. A lost round must be finalized instead.
    pub fn continue_round(&self, key: SessionKey) -> Result<SessionView, DomainError> {
        self.sessions.with_session_mut(key, |session| {
            match session.status {
                RoundStatus::Lost => {
                    return Err(DomainError::state(
                        StateKind::GameOver,
                        "round is lost; finalize the session instead",
                    ));
                }
                RoundStatus::Won => {
                    let award = settle_win(session);
                    if award > 0 {
                        debug!(award, "settled_win_before_continue");
                    }
                }
                RoundStatus::Active => {
                    debug!(round = session.round, "abandoned_active_round");
                }
            }

            session.next_round(self.words.pick());
            info!(
                nickname = %session.nickname,
                round = session.round,
                score = session.score,
                "round_started"
            );
            Ok(snapshot(session))
        })
    }
}
