pub mod health;
pub mod presets;
pub mod sessions;
pub mod settings;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /presets                       industry filename presets
/// /uploads                       stage a source PDF (POST)
/// /sessions                      create session (POST)
/// /sessions/{id}                 status query
/// /sessions/{id}/cancel          request cancellation (POST)
/// /sessions/{id}/stream          WebSocket progress stream
/// /settings                      persisted defaults (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(presets::router())
        .nest("/uploads", uploads::router())
        .nest("/sessions", sessions::router())
        .nest("/settings", settings::router())
}
