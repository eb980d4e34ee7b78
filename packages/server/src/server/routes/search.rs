use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use partscout::LookupResult;
use serde::Deserialize;

use crate::server::{app::AppState, error::ApiError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub part_number: String,
}

/// Single-part lookup: narrative (HTML and markdown) plus its evidence.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<LookupResult>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let result = state.aggregator.lookup(&request.part_number).await?;
    Ok(Json(result))
}
