#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;


#[ctor::ctor]
fn init_logging() {
    hangman_test_support::logging::init();
}

/// Assert a 303 and return its `Location`.
pub fn assert_see_other(resp: &ServiceResponse<BoxBody>, expected: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect should carry a Location header");
    assert_eq!(location, expected);
}
