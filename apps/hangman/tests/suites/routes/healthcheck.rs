use crate::support::app_builder::create_test_app;
use crate::support::game_setup::{get_json, scripted_state};

#[actix_web::test]
async fn health_reports_ok() {
    let app = create_test_app(scripted_state(&["mer"]))
        .with_prod_routes()
        .build()
        .await;

    let body = get_json(&app, "/health").await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["leaderboard_entries"], 0);
    assert_eq!(body["leaderboard_persistent"], false);
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
}
