use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test;

use crate::common::assert_see_other;
use crate::support::app_builder::create_test_app;
use crate::support::game_setup::{get, get_json, scripted_state, start};

#[actix_web::test]
async fn home_serves_entry_form() {
    let app = create_test_app(scripted_state(&["lune"]))
        .with_prod_routes()
        .build()
        .await;

    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"name="nickname""#));
    assert!(html.contains(r#"method="post""#));
}

#[actix_web::test]
async fn start_redirects_to_play_with_fresh_round() {
    let app = create_test_app(scripted_state(&["chocolat"]))
        .with_prod_routes()
        .build()
        .await;

    let resp = start(&app, "  alice  ").await;
    assert_see_other(&resp, "/play");

    let view = get_json(&app, "/play").await;
    assert_eq!(view["nickname"], "alice");
    assert_eq!(view["phase"], "active");
    assert_eq!(view["round"], 1);
    assert_eq!(view["pattern"], "_ _ _ _ _ _ _ _");
    assert_eq!(view["word_length"], 8);
    assert_eq!(view["lives"], 7);
    assert_eq!(view["max_lives"], 7);
    assert_eq!(view["score"], 0);
    assert_eq!(view["tried_letters"].as_array().unwrap().len(), 0);
    assert!(view.get("word").is_none(), "secret must stay hidden");
}

#[actix_web::test]
async fn empty_nickname_is_accepted() {
    let app = create_test_app(scripted_state(&["mer"]))
        .with_prod_routes()
        .build()
        .await;

    assert_see_other(&start(&app, "").await, "/play");
    let view = get_json(&app, "/play").await;
    assert_eq!(view["nickname"], "");
}

#[actix_web::test]
async fn starting_again_discards_previous_session() {
    let app = create_test_app(scripted_state(&["lune", "mer"]))
        .with_prod_routes()
        .build()
        .await;

    start(&app, "first").await;
    start(&app, "second").await;

    let view = get_json(&app, "/play").await;
    assert_eq!(view["nickname"], "second");
    assert_eq!(view["round"], 1);
    assert_eq!(view["word_length"], 3);
}

#[actix_web::test]
async fn play_without_session_goes_home() {
    let app = create_test_app(scripted_state(&["lune"]))
        .with_prod_routes()
        .build()
        .await;

    assert_see_other(&get(&app, "/play").await, "/");
}
