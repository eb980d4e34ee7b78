//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use partscout::{
    sources::{GeminiModel, GoogleSearch, PlaywrightCrossReference},
    Aggregator, ScoutConfig,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    batch_handler, export_handler, health_handler, search_handler, upload_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }

    /// Wire the production sources (Google search, Playwright, Gemini).
    pub fn from_config(config: &ScoutConfig) -> Result<Self> {
        let searcher = GoogleSearch::new(config.search.clone())
            .context("Failed to create search client")?;
        let model =
            GeminiModel::new(config.model.clone()).context("Failed to create model client")?;
        let cross_reference = PlaywrightCrossReference::new(config.cross_reference.clone());

        Ok(Self::new(Aggregator::new(
            Arc::new(searcher),
            Arc::new(cross_reference),
            Arc::new(model),
            config.clone(),
        )))
    }
}

/// Build the Axum application router
///
/// An empty `allowed_origins` allows any origin.
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/search", post(search_handler))
        .route("/api/batch", post(batch_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/export", post(export_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() {
        return Any.into();
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(values)
}
