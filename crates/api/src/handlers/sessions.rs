//! Handlers for the `/sessions` resource.
//!
//! Session creation validates and registers a `Ready` session; execution
//! starts when the first progress stream attaches (see [`crate::stream`]).

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use printseed_core::{CoreError, DelayConfig, IndustryJobConfig, PdfSource, TimingMode};
use printseed_session::registry::SessionSpec;
use printseed_session::SessionSnapshot;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions request body.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Target print ingestion URL; empty falls back to stored settings.
    #[serde(default)]
    pub endpoint: String,
    /// Raw token for the `Authorization` header; empty falls back to
    /// stored settings.
    #[serde(default)]
    pub auth_token: String,
    #[serde(default)]
    pub timing_mode: TimingMode,
    #[serde(default = "default_fixed_delay")]
    pub fixed_delay: f64,
    #[serde(default = "default_min_delay")]
    pub min_delay: f64,
    #[serde(default = "default_max_delay")]
    pub max_delay: f64,
    pub industries: BTreeMap<String, IndustryRequest>,
}

fn default_fixed_delay() -> f64 {
    1.0
}
fn default_min_delay() -> f64 {
    0.5
}
fn default_max_delay() -> f64 {
    180.0
}

/// Per-industry block of the creation request.
#[derive(Debug, Deserialize)]
pub struct IndustryRequest {
    pub num_jobs: usize,
    #[serde(default)]
    pub usernames: String,
    #[serde(default)]
    pub printers: String,
    #[serde(default)]
    pub filenames: String,
    pub pdf_source: PdfSource,
    #[serde(default = "default_pages")]
    pub min_pages: u32,
    #[serde(default = "default_pages")]
    pub max_pages: u32,
    /// Required when `pdf_source` is `upload`.
    #[serde(default)]
    pub upload_id: Option<Uuid>,
}

fn default_pages() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub total_jobs: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions
///
/// Validate the request, build the shuffled queue, and register a new
/// `Ready` session. Returns 201 with `{session_id, total_jobs}`; any
/// validation problem is a 400 and nothing is registered.
pub async fn create_session(
    State(state): State<AppState>,
    Json(input): Json<CreateSessionRequest>,
) -> AppResult<impl IntoResponse> {
    let (endpoint, auth_token) = resolve_target(&state, &input).await?;

    let mut industries = BTreeMap::new();
    for (name, industry) in &input.industries {
        industries.insert(name.clone(), resolve_industry(&state, industry).await?);
    }

    let spec = SessionSpec {
        endpoint,
        auth_token,
        delay: DelayConfig {
            mode: input.timing_mode,
            fixed_delay: input.fixed_delay,
            min_delay: input.min_delay,
            max_delay: input.max_delay,
        },
        industries,
    };

    // Thread-local rng is !Send; a seeded StdRng keeps the handler future Send.
    let mut rng = StdRng::from_os_rng();
    let (session_id, total_jobs) = state.registry.create(spec, &mut rng).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreateSessionResponse {
                session_id,
                total_jobs,
            },
        }),
    ))
}

/// GET /api/v1/sessions/{id}
///
/// Pull-based status query for reconnecting clients: status, totals, and
/// the full results list so far. 404 for unknown or evicted sessions.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<SessionSnapshot>>> {
    let snapshot = state.registry.snapshot(id).await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/sessions/{id}/cancel
///
/// Request cooperative cancellation. Returns an immediate
/// `{completed, total}` receipt; the runner observes the flag within one
/// poll slice. Idempotent; 404 for unknown or evicted sessions.
pub async fn cancel_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let receipt = state.registry.request_cancel(id).await?;
    tracing::info!(session_id = %id, completed = receipt.completed, "Cancellation requested");
    Ok(Json(DataResponse { data: receipt }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the target endpoint/token, falling back to stored settings
/// when the request leaves them empty.
async fn resolve_target(
    state: &AppState,
    input: &CreateSessionRequest,
) -> AppResult<(String, String)> {
    let mut endpoint = input.endpoint.trim().to_string();
    let mut auth_token = input.auth_token.clone();

    if endpoint.is_empty() || auth_token.is_empty() {
        let stored = state.settings.load().await?;
        if endpoint.is_empty() {
            endpoint = stored.endpoint.trim().to_string();
        }
        if auth_token.is_empty() {
            auth_token = stored.auth_token;
        }
    }

    Ok((endpoint, auth_token))
}

/// Translate one industry request block, resolving `upload_id` to its
/// staged path for upload-sourced jobs.
async fn resolve_industry(
    state: &AppState,
    industry: &IndustryRequest,
) -> AppResult<IndustryJobConfig> {
    let upload_ref = match (industry.pdf_source, industry.upload_id) {
        (PdfSource::Upload, Some(id)) => Some(state.uploads.resolve(id).await?),
        (PdfSource::Upload, None) if industry.num_jobs > 0 => {
            return Err(AppError::Core(CoreError::Validation(
                "upload_id is required when pdf_source is \"upload\"".into(),
            )));
        }
        _ => None,
    };

    Ok(IndustryJobConfig {
        num_jobs: industry.num_jobs,
        usernames: industry.usernames.clone(),
        printers: industry.printers.clone(),
        filenames: industry.filenames.clone(),
        pdf_source: industry.pdf_source,
        min_pages: industry.min_pages,
        max_pages: industry.max_pages,
        upload_ref,
    })
}
