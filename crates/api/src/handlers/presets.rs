//! Handlers for the `/presets` resource.

use std::collections::BTreeMap;

use axum::Json;

use printseed_core::presets;

use crate::response::DataResponse;

/// GET /api/v1/presets
///
/// Static per-industry filename catalogs for the submission form.
pub async fn list_presets() -> Json<DataResponse<BTreeMap<&'static str, &'static [&'static str]>>> {
    let data: BTreeMap<_, _> = presets::INDUSTRIES
        .iter()
        .filter_map(|&industry| presets::filenames_for(industry).map(|names| (industry, names)))
        .collect();
    Json(DataResponse { data })
}
