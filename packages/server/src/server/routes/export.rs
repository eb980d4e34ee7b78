use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use partscout::{BatchSummary, ExportTable};

use crate::server::error::ApiError;

/// Download a batch summary as CSV.
pub async fn export_handler(
    payload: Result<Json<BatchSummary>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(summary) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let csv = ExportTable::from_summary(&summary).to_csv();
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(&Utc::now().format("%Y%m%d_%H%M%S").to_string())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

fn export_file_name(timestamp: &str) -> String {
    format!("part_alternatives_{}.csv", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("20240131_235959"),
            "part_alternatives_20240131_235959.csv"
        );
    }
}
