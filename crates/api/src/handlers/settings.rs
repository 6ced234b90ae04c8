//! Handlers for the `/settings` resource.
//!
//! Settings are the persisted defaults session creation falls back to
//! when a request omits the endpoint or token. The token is stored
//! obfuscated on disk; see [`crate::settings`] for the (non-)security
//! properties of that encoding.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::settings::Settings;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Settings>>> {
    let settings = state.settings.load().await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
///
/// Replace the persisted settings wholesale. In-flight sessions keep the
/// endpoint/token they resolved at creation time.
pub async fn put_settings(
    State(state): State<AppState>,
    Json(input): Json<Settings>,
) -> AppResult<Json<DataResponse<Settings>>> {
    state.settings.save(&input).await?;
    Ok(Json(DataResponse { data: input }))
}
