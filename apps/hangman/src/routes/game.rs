//! Game routes: start, play, guess, end and continue.
//!
//! Every route acts on [`SessionKey::DEFAULT`]. Expected state mismatches
//! (no session, round already over, round still running) redirect to the
//! page that fits the current state. Views are HTML unless the client asks
//! for `application/json`.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use super::{html, pages, see_other, wants_json};
use crate::domain::state::SessionPhase;
use crate::error::AppError;
use crate::errors::domain::{DomainError, StateKind};
use crate::services::sessions::SessionKey;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartForm {
    #[serde(default)]
    pub nickname: String,
}

#[derive(Debug, Deserialize)]
pub struct GuessForm {
    #[serde(default)]
    pub guess: String,
}

/// Where a state error sends the player.
fn redirect_for(kind: StateKind) -> &'static str {
    match kind {
        StateKind::NoSession => "/",
        StateKind::RoundOver | StateKind::GameOver => "/end",
        StateKind::RoundInProgress => "/play",
    }
}

/// GET /
async fn home() -> HttpResponse {
    html(pages::home())
}

/// POST / (form `nickname`)
async fn start(app_state: web::Data<AppState>, form: web::Form<StartForm>) -> HttpResponse {
    app_state
        .game()
        .start_session(SessionKey::DEFAULT, &form.nickname);
    see_other("/play")
}

/// GET /play
///
/// Current session view while the round is running.
async fn play(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match app_state.game().snapshot(SessionKey::DEFAULT) {
        Ok(view) if view.phase == SessionPhase::Active => {
            if wants_json(&req) {
                Ok(HttpResponse::Ok().json(view))
            } else {
                Ok(html(pages::play(&view)))
            }
        }
        Ok(_) => Ok(see_other("/end")),
        Err(err) => state_redirect_or_error(err),
    }
}

/// POST /guess (form `guess`)
///
/// Invalid input is dropped and the player lands back on the unchanged play
/// view.
async fn guess(
    app_state: web::Data<AppState>,
    form: web::Form<GuessForm>,
) -> Result<HttpResponse, AppError> {
    match app_state.game().submit_guess(SessionKey::DEFAULT, &form.guess) {
        Ok(_) => Ok(see_other("/play")),
        Err(err) if err.is_invalid_input() => {
            debug!(error = %err, "guess_ignored");
            Ok(see_other("/play"))
        }
        Err(err) => state_redirect_or_error(err),
    }
}

/// GET /end
async fn end(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match app_state.game().finalize(SessionKey::DEFAULT) {
        Ok(outcome) if wants_json(&req) => Ok(HttpResponse::Ok().json(outcome)),
        Ok(outcome) => Ok(html(pages::end(&outcome))),
        Err(err) => state_redirect_or_error(err),
    }
}

/// GET|POST /continue
async fn continue_round(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match app_state.game().continue_round(SessionKey::DEFAULT) {
        Ok(_) => Ok(see_other("/play")),
        Err(err) => state_redirect_or_error(err),
    }
}

fn state_redirect_or_error(err: DomainError) -> Result<HttpResponse, AppError> {
    match err.state_kind() {
        Some(kind) => Ok(see_other(redirect_for(kind))),
        None => Err(err.into()),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(home))
            .route(web::post().to(start)),
    );
    cfg.service(web::resource("/play").route(web::get().to(play)));
    cfg.service(web::resource("/guess").route(web::post().to(guess)));
    cfg.service(web::resource("/end").route(web::get().to(end)));
    cfg.service(
        web::resource("/continue")
            .route(web::get().to(continue_round))
            .route(web::post().to(continue_round)),
    );
}
