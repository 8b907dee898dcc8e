use tracing::{debug, info};

use super::{GameFlowService, GuessReport};
use crate::domain::guess::Proposal;
use crate::domain::snapshot::{snapshot, SessionView};
use crate::domain::state::Session;
use crate::errors::domain::DomainError;
use crate::services::sessions::SessionKey;

impl GameFlowService {
    /// Start a fresh session for `nickname`, discarding any session already
    /// stored under `key`.
    pub fn start_session(&self, key: SessionKey, nickname: &str) -> SessionView {
        let nickname = nickname.trim();
        let secret = self.words.pick();
        let session = Session::new(nickname, secret);
        let view = snapshot(&session);

        if let Some(previous) = self.sessions.insert(key, session) {
            debug!(
                nickname = %previous.nickname,
                score = previous.score,
                "discarded_previous_session"
            );
        }
        info!(nickname = %nickname, word_length = view.word_length, "session_started");
        view
    }

    /// Resolve one raw guess (a letter or a whole word).
    ///
    /// Invalid input (empty, non-letter, repeated letter) is rejected with a
    /// validation error and leaves the session unchanged.
    pub fn submit_guess(&self, key: SessionKey, raw: &str) -> Result<GuessReport, DomainError> {
        self.sessions.with_session_mut(key, |session| {
            let proposal = Proposal::parse(raw)?;
            let outcome = session.apply_guess(&proposal)?;
            debug!(
                round = session.round,
                outcome = ?outcome,
                lives = session.lives,
                status = ?session.status,
                "guess_resolved"
            );
            Ok(GuessReport {
                outcome,
                session: snapshot(session),
            })
        })
    }
}
