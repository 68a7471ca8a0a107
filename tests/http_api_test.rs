//! End-to-end tests for the REST API over an in-process router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use hangman_server::{IdGenerator, SessionId, SessionStore, WordSource, router};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

struct FixedWord(&'static str);

impl WordSource for FixedWord {
    fn pick(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Default)]
struct SeqIds(AtomicUsize);

impl IdGenerator for SeqIds {
    fn generate(&self) -> SessionId {
        format!("game-{}", self.0.fetch_add(1, Ordering::Relaxed))
    }
}

fn app(word: &'static str) -> Router {
    let store = SessionStore::new(Arc::new(FixedWord(word)), Arc::new(SeqIds::default()));
    router(store)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Request build failed")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Request build failed")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body read failed")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("Body is JSON");
    (status, body)
}

async fn guess(app: &Router, id: &str, letter: &str) -> (StatusCode, Value) {
    let request = post_json("/api/guess", json!({ "gameId": id, "letter": letter }));
    send(app, request).await
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app("cat");
    let (status, body) = send(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_new_game_returns_a_fresh_view() {
    let app = app("cat");
    let (status, body) = send(&app, post_json("/api/new", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "game-0");
    assert_eq!(body["maskedWord"], "___");
    assert_eq!(body["wrongLetters"], json!([]));
    assert_eq!(body["guessedLetters"], json!([]));
    assert_eq!(body["remaining"], 6);
    assert_eq!(body["maxWrong"], 6);
    assert_eq!(body["status"], "playing");
    assert!(!body.as_object().expect("Body is an object").contains_key("answer"));
}

#[tokio::test]
async fn test_state_matches_the_created_view() {
    let app = app("cat");
    let (_, created) = send(&app, post_json("/api/new", json!({}))).await;

    let (status, fetched) = send(&app, get("/api/state/game-0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_guess_flow_over_http() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    let (status, body) = guess(&app, "game-0", "a").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maskedWord"], "_a_");
    assert_eq!(body["guessedLetters"], json!(["a"]));
    assert_eq!(body["remaining"], 6);

    let (status, body) = guess(&app, "game-0", "z").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wrongLetters"], json!(["z"]));
    assert_eq!(body["remaining"], 5);
    assert_eq!(body["status"], "playing");
}

#[tokio::test]
async fn test_letters_are_normalized_before_applying() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    let (status, body) = guess(&app, "game-0", " A ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guessedLetters"], json!(["a"]));
    assert_eq!(body["maskedWord"], "_a_");
}

#[tokio::test]
async fn test_unknown_game_is_404() {
    let app = app("cat");

    let (status, body) = guess(&app, "game-99", "a").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Game not found" }));

    let (status, body) = send(&app, get("/api/state/game-99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Game not found" }));
}

#[tokio::test]
async fn test_missing_game_id_is_404() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    let (status, body) = send(&app, post_json("/api/guess", json!({ "letter": "a" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Game not found" }));
}

#[tokio::test]
async fn test_malformed_bodies_read_as_missing_game_id() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    for body in ["not json at all", "", "[1, 2, 3]", "\"just a string\""] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/guess")
            .body(Body::from(body))
            .expect("Request build failed");

        let (status, response) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "body: {body:?}");
        assert_eq!(response, json!({ "error": "Game not found" }));
    }
}

#[tokio::test]
async fn test_unknown_game_outranks_invalid_letter() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    let (status, body) = guess(&app, "game-99", "!!").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Game not found" }));
}

#[tokio::test]
async fn test_invalid_letters_are_400() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    for letter in ["", "  ", "ab", "5", "!"] {
        let (status, body) = guess(&app, "game-0", letter).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "letter: {letter:?}");
        assert_eq!(body, json!({ "error": "Invalid letter" }));
    }
}

#[tokio::test]
async fn test_absent_and_non_string_letters_are_400() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    let absent = post_json("/api/guess", json!({ "gameId": "game-0" }));
    let (status, body) = send(&app, absent).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid letter" }));

    let numeric = post_json("/api/guess", json!({ "gameId": "game-0", "letter": 5 }));
    let (status, body) = send(&app, numeric).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid letter" }));
}

#[tokio::test]
async fn test_lost_game_reveals_the_answer_everywhere() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    let mut last = json!(null);
    for letter in ["b", "d", "e", "f", "g", "h"] {
        let (status, body) = guess(&app, "game-0", letter).await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    assert_eq!(last["status"], "lost");
    assert_eq!(last["remaining"], 0);
    assert_eq!(last["answer"], "cat");

    // The answer stays visible on plain reads of a lost game
    let (_, state) = send(&app, get("/api/state/game-0")).await;
    assert_eq!(state["answer"], "cat");
}

#[tokio::test]
async fn test_won_game_keeps_the_answer_out_of_the_body() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;

    let mut last = json!(null);
    for letter in ["c", "a", "t"] {
        let (_, body) = guess(&app, "game-0", letter).await;
        last = body;
    }
    assert_eq!(last["status"], "won");
    assert_eq!(last["maskedWord"], "cat");
    assert!(!last.as_object().expect("Body is an object").contains_key("answer"));
}

#[tokio::test]
async fn test_finished_game_answers_guesses_with_an_unchanged_view() {
    let app = app("cat");
    send(&app, post_json("/api/new", json!({}))).await;
    for letter in ["b", "d", "e", "f", "g", "h"] {
        guess(&app, "game-0", letter).await;
    }
    let (_, frozen) = send(&app, get("/api/state/game-0")).await;

    // New letter, repeated letter, and a correct letter all return the same view
    for letter in ["x", "b", "c"] {
        let (status, body) = guess(&app, "game-0", letter).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, frozen);
    }
}
