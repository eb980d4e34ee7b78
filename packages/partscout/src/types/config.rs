//! Configuration passed explicitly into every source and pipeline stage.

use std::time::Duration;

use crate::security::ApiKey;

/// Top-level configuration for a lookup pipeline.
#[derive(Debug, Clone, Default)]
pub struct ScoutConfig {
    pub search: SearchConfig,
    pub model: ModelConfig,
    pub cross_reference: CrossReferenceConfig,
    pub batch: BatchConfig,
}

impl ScoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_model(mut self, model: ModelConfig) -> Self {
        self.model = model;
        self
    }

    pub fn with_cross_reference(mut self, cross_reference: CrossReferenceConfig) -> Self {
        self.cross_reference = cross_reference;
        self
    }

    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }
}

/// Web search (Google Custom Search JSON API).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API key. Absence is reported when a search is attempted.
    pub api_key: Option<ApiKey>,

    /// Programmable search engine id (`cx`).
    pub engine_id: Option<String>,

    /// Search endpoint.
    pub endpoint: String,

    /// Evidence items kept per part. Default: 6.
    pub result_count: usize,

    /// HTTP timeout for the search call. Default: 60s.
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            result_count: 6,
            timeout: Duration::from_secs(60),
        }
    }
}

impl SearchConfig {
    pub fn with_credentials(mut self, api_key: impl Into<ApiKey>, engine_id: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.engine_id = Some(engine_id.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }
}

/// Generative model (Gemini `generateContent`).
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// API key. Absence is reported when synthesis is attempted.
    pub api_key: Option<ApiKey>,

    /// Model name. Default: gemini-1.5-flash.
    pub model: String,

    /// API base URL (for proxies and tests).
    pub base_url: String,

    /// Sampling temperature. Default: 0.2.
    pub temperature: f32,

    /// HTTP timeout for the model call. Default: 60s.
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.2,
            timeout: Duration::from_secs(60),
        }
    }
}

impl ModelConfig {
    pub fn with_api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Manufacturer cross-reference page driven through headless Chromium.
#[derive(Debug, Clone)]
pub struct CrossReferenceConfig {
    /// Page URL with a `{part}` placeholder for the URL-encoded part number.
    pub url_template: String,

    /// CSS selector for product-detail anchors (the result marker).
    pub product_selector: String,

    /// Browser identity presented to the site.
    pub user_agent: String,

    /// Bound on navigation until network quiescence. Default: 30s.
    pub navigation_timeout: Duration,

    /// Bound on waiting for the first product anchor. Default: 15s.
    pub selector_timeout: Duration,

    /// Extra time for browser start-up and teardown before the session is
    /// killed. Default: 15s.
    pub session_grace: Duration,

    /// Node.js executable with the `playwright` package resolvable.
    pub node_binary: String,
}

impl Default for CrossReferenceConfig {
    fn default() -> Self {
        Self {
            url_template: "https://www.ti.com/cross-reference-search?singlePart={part}&p=1"
                .to_string(),
            product_selector: r#"a[href*="/product/"]"#.to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            navigation_timeout: Duration::from_secs(30),
            selector_timeout: Duration::from_secs(15),
            session_grace: Duration::from_secs(15),
            node_binary: "node".to_string(),
        }
    }
}

impl CrossReferenceConfig {
    /// Build the lookup URL for one part.
    pub fn url_for(&self, part_number: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(part_number.as_bytes()).collect();
        self.url_template.replace("{part}", &encoded)
    }

    pub fn with_timeouts(mut self, navigation: Duration, selector: Duration) -> Self {
        self.navigation_timeout = navigation;
        self.selector_timeout = selector;
        self
    }

    /// Hard bound on one rendering session.
    pub fn session_deadline(&self) -> Duration {
        self.navigation_timeout + self.selector_timeout + self.session_grace
    }

    pub fn with_session_grace(mut self, grace: Duration) -> Self {
        self.session_grace = grace;
        self
    }

    pub fn with_node_binary(mut self, node: impl Into<String>) -> Self {
        self.node_binary = node.into();
        self
    }
}

/// Batch bounds.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Most part numbers accepted in one batch. Default: 10.
    pub max_parts: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_parts: 10 }
    }
}
