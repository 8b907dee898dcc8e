use actix_web::http::header::{ContentType, ACCEPT, LOCATION};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod game;
pub mod health;
pub mod leaderboard;
pub mod pages;

/// Register every application route.
///
/// Malformed form bodies and unknown paths answer with problem details like
/// any other [`AppError`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("invalid form body: {err}")).into()
    }));

    game::configure_routes(cfg);
    leaderboard::configure_routes(cfg);
    health::configure_routes(cfg);

    cfg.default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("no route for {} {}", req.method(), req.path()),
    ))
}

/// 303 See Other to `location`.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Whether the client asked for JSON instead of an HTML page.
pub(crate) fn wants_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}
