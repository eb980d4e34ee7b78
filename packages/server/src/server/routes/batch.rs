use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use partscout::{run_batch, BatchSummary};
use serde::Deserialize;

use crate::server::{app::AppState, error::ApiError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    #[serde(default)]
    pub part_numbers: Vec<String>,
}

/// Bounded batch over a JSON list of part numbers.
pub async fn batch_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchSummary>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let aggregator = state.aggregator.as_ref();
    let summary = run_batch(aggregator, &request.part_numbers, &aggregator.config().batch).await?;
    Ok(Json(summary))
}
