use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub search_configured: bool,
    pub model_configured: bool,
}

/// Health check endpoint
///
/// Reports which credentials are present. A missing search key still serves
/// lookups (without web evidence); a missing model key fails them.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let config = state.aggregator.config();

    Json(HealthResponse {
        status: "ok".to_string(),
        search_configured: config.search.is_configured(),
        model_configured: config.model.is_configured(),
    })
}
