//! Handlers for the `/uploads` resource.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use printseed_core::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub upload_id: Uuid,
}

/// POST /api/v1/uploads
///
/// Stage a source PDF for later upload-sourced sessions. Expects a
/// multipart form with a `file` part; returns 201 with `{upload_id}`.
pub async fn stage_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file part: {e}")))?;
        let upload_id = state.uploads.stage(&bytes).await?;
        return Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: UploadResponse { upload_id },
            }),
        ));
    }

    Err(AppError::Core(CoreError::Validation(
        "Multipart body has no \"file\" part".into(),
    )))
}
