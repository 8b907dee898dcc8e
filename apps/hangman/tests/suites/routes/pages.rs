use crate::support::app_builder::create_test_app;
use crate::support::game_setup::{get, get_html, guess, post_form, scripted_state, start};

#[actix_web::test]
async fn browser_can_play_a_round_to_the_end() {
    let app = create_test_app(scripted_state(&["lune", "mer"]))
        .with_prod_routes()
        .build()
        .await;

    let home = get_html(&app, "/").await;
    assert!(home.contains(r#"action="/""#));
    assert!(home.contains(r#"name="nickname""#));
    start(&app, "ana").await;

    let page = get_html(&app, "/play").await;
    assert!(page.contains(r#"<form method="post" action="/guess">"#));
    assert!(page.contains(r#"name="guess""#));
    assert!(page.contains("_ _ _ _"));
    assert!(page.contains("Lives: 7/7"));
    assert!(page.contains("Round 1"));

    guess(&app, "u").await;
    guess(&app, "z").await;
    let page = get_html(&app, "/play").await;
    assert!(page.contains("_ u _ _"));
    assert!(page.contains("Lives: 6/7"));
    assert!(page.contains("Tried: u, z"));

    guess(&app, "lune").await;
    let end = get_html(&app, "/end").await;
    assert!(end.contains("<strong>lune</strong>"));
    assert!(end.contains("Score: 60"));
    assert!(end.contains(r#"action="/continue""#));

    post_form(&app, "/continue", &[]).await;
    let page = get_html(&app, "/play").await;
    assert!(page.contains("Round 2"));
    assert!(page.contains("score 60"));
}

#[actix_web::test]
async fn lost_end_page_reveals_the_word() {
    let app = create_test_app(scripted_state(&["mer"]))
        .with_prod_routes()
        .build()
        .await;
    start(&app, "bo").await;
    for letter in ["a", "b", "c", "d", "f", "g", "h"] {
        guess(&app, letter).await;
    }

    let end = get_html(&app, "/end").await;
    assert!(end.contains("Game over"));
    assert!(end.contains("<strong>mer</strong>"));
    assert!(end.contains(r#"<a href="/">New game</a>"#));
    assert!(!end.contains("/continue"));

    let board = get_html(&app, "/leaderboard").await;
    assert!(board.contains("<tr><td>bo</td><td>0</td></tr>"));
}

#[actix_web::test]
async fn nickname_is_escaped_in_pages() {
    let app = create_test_app(scripted_state(&["mer"]))
        .with_prod_routes()
        .build()
        .await;
    start(&app, "<script>x</script>").await;

    let page = get_html(&app, "/play").await;
    assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!page.contains("<script>"));

    for letter in ["a", "b", "c", "d", "f", "g", "h"] {
        guess(&app, letter).await;
    }
    get(&app, "/end").await;
    let board = get_html(&app, "/leaderboard").await;
    assert!(board.contains("&lt;script&gt;"));
    assert!(!board.contains("<script>"));
}

#[actix_web::test]
async fn empty_leaderboard_page() {
    let app = create_test_app(scripted_state(&["mer"]))
        .with_prod_routes()
        .build()
        .await;

    assert!(get_html(&app, "/leaderboard").await.contains("No scores yet."));
}
