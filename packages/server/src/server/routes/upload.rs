use axum::{
    extract::{multipart::MultipartRejection, Extension, Multipart},
    Json,
};
use partscout::{parse_part_list, run_batch, BatchSummary};

use crate::server::{app::AppState, error::ApiError};

/// Batch over a part list uploaded as a text or CSV file.
///
/// The first file field is used; other fields are ignored.
pub async fn upload_handler(
    Extension(state): Extension<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BatchSummary>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let mut contents = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.file_name().is_none() && field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let text = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        tracing::info!(file_name = %file_name, bytes = text.len(), "Received part list upload");
        contents = Some(text);
        break;
    }

    let text = contents.ok_or_else(|| ApiError::bad_request("no file uploaded"))?;
    let part_numbers = parse_part_list(&text);

    let aggregator = state.aggregator.as_ref();
    let summary = run_batch(aggregator, &part_numbers, &aggregator.config().batch).await?;
    Ok(Json(summary))
}
