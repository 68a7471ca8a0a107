//! HTTP API surface: routes, handlers, and error translation.

use crate::session::{GameView, SessionError, SessionStore};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::instrument;

/// Builds the API router over the given store.
///
/// Handlers hold no state of their own; the store is cloned into each
/// request through axum's state extractor.
pub fn router(store: SessionStore) -> Router {
    Router::new()
        .route("/api/new", post(new_game))
        .route("/api/state/{id}", get(get_state))
        .route("/api/guess", post(guess))
        .route("/api/health", get(health))
        .with_state(store)
}

/// Starts a session and returns its first view.
#[instrument(skip(store))]
async fn new_game(State(store): State<SessionStore>) -> Json<GameView> {
    Json(store.create_session())
}

/// Returns the current view of a session.
#[instrument(skip(store))]
async fn get_state(
    State(store): State<SessionStore>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, SessionError> {
    Ok(Json(store.get_session(&id)?))
}

/// Applies one letter to a session.
///
/// The body is read leniently: a missing, malformed, or non-object body
/// degrades to empty fields, so it reports the same way as an unknown
/// session rather than as a transport error.
#[instrument(skip(store, body))]
async fn guess(
    State(store): State<SessionStore>,
    body: Bytes,
) -> Result<Json<GameView>, SessionError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let id = payload.get("gameId").and_then(Value::as_str).unwrap_or("");
    let letter = payload.get("letter").and_then(Value::as_str).unwrap_or("");
    Ok(Json(store.apply_guess(id, letter)?))
}

/// Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidLetter(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
