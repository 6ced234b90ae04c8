//! Route definitions for the `/presets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::presets;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// GET    /presets    -> list_presets
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/presets", get(presets::list_presets))
}
