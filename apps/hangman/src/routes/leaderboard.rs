use actix_web::{web, HttpRequest, HttpResponse};

use super::{html, pages, wants_json};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /leaderboard
///
/// Every recorded entry in insertion order, as a table or as a JSON array.
async fn list(req: HttpRequest, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = app_state.leaderboard().all();
    if wants_json(&req) {
        Ok(HttpResponse::Ok().json(entries))
    } else {
        Ok(html(pages::leaderboard(&entries)))
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/leaderboard", web::get().to(list));
}
