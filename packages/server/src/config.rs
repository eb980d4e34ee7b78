use anyhow::{Context, Result};
use dotenvy::dotenv;
use partscout::{ApiKey, CrossReferenceConfig, ModelConfig, ScoutConfig, SearchConfig};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub scout: ScoutConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing API keys are not an error here: the lookup degrades (search)
    /// or fails per request (model) and `/health` reports what is configured.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_blank = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let port = non_blank("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let allowed_origins = non_blank("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let search = SearchConfig {
            api_key: non_blank("GOOGLE_API_KEY").map(ApiKey::new),
            engine_id: non_blank("GOOGLE_SEARCH_ENGINE_ID"),
            ..SearchConfig::default()
        };

        let mut model = ModelConfig {
            api_key: non_blank("GEMINI_API_KEY").map(ApiKey::new),
            ..ModelConfig::default()
        };
        if let Some(name) = non_blank("GEMINI_MODEL") {
            model = model.with_model(name);
        }

        let defaults = CrossReferenceConfig::default();
        let navigation = seconds(non_blank("XREF_NAVIGATION_TIMEOUT_SECS"), "XREF_NAVIGATION_TIMEOUT_SECS")?
            .unwrap_or(defaults.navigation_timeout);
        let selector = seconds(non_blank("XREF_SELECTOR_TIMEOUT_SECS"), "XREF_SELECTOR_TIMEOUT_SECS")?
            .unwrap_or(defaults.selector_timeout);
        let mut cross_reference = defaults.with_timeouts(navigation, selector);
        if let Some(node) = non_blank("NODE_BINARY") {
            cross_reference = cross_reference.with_node_binary(node);
        }

        Ok(Self {
            port,
            allowed_origins,
            scout: ScoutConfig::new()
                .with_search(search)
                .with_model(model)
                .with_cross_reference(cross_reference),
        })
    }
}

fn seconds(value: Option<String>, name: &str) -> Result<Option<Duration>> {
    value
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("{} must be a whole number of seconds", name))
        })
        .transpose()
}
