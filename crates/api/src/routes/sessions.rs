//! Route definitions for the `/sessions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;
use crate::stream;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /                -> create_session
/// GET    /{id}            -> get_session
/// POST   /{id}/cancel     -> cancel_session
/// GET    /{id}/stream     -> session_stream (WebSocket)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::create_session))
        .route("/{id}", get(sessions::get_session))
        .route("/{id}/cancel", post(sessions::cancel_session))
        .route("/{id}/stream", get(stream::session_stream))
}
