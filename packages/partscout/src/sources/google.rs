//! Google Custom Search backed web searcher.
//!
//! Queries are biased toward datasheets and authorized distributors so the
//! evidence handed to the model is worth grounding on.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ScoutError};
use crate::traits::searcher::WebSearcher;
use crate::types::config::SearchConfig;
use crate::types::evidence::EvidenceItem;

/// Authorized-distributor domains that count as authoritative evidence.
const DISTRIBUTOR_SITES: &[&str] = &[
    "digikey.com",
    "mouser.com",
    "arrow.com",
    "avnet.com",
    "newark.com",
];

/// The Custom Search API caps `num` at 10.
const MAX_RESULTS_PER_REQUEST: usize = 10;

/// Build the search query for a part number.
pub fn build_query(part_number: &str) -> String {
    let mut signals = vec!["datasheet".to_string()];
    signals.extend(DISTRIBUTOR_SITES.iter().map(|site| format!("site:{}", site)));
    signals.push("filetype:pdf".to_string());

    format!("\"{}\" ({})", part_number, signals.join(" OR "))
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Web searcher using the Google Custom Search JSON API.
pub struct GoogleSearch {
    config: SearchConfig,
    client: reqwest::Client,
}

impl GoogleSearch {
    /// Create a searcher. Credentials are checked per call, not here.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScoutError::Search(Box::new(e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl WebSearcher for GoogleSearch {
    async fn search(&self, part_number: &str, limit: usize) -> Result<Vec<EvidenceItem>> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(ScoutError::MissingCredential {
                name: "GOOGLE_API_KEY",
            })?;
        let engine_id = self
            .config
            .engine_id
            .as_deref()
            .ok_or(ScoutError::MissingCredential {
                name: "GOOGLE_SEARCH_ENGINE_ID",
            })?;

        let query = build_query(part_number);
        let num = limit.clamp(1, MAX_RESULTS_PER_REQUEST).to_string();
        debug!(part_number, query = %query, "Running evidence search");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("key", api_key.expose()),
                ("cx", engine_id),
                ("q", query.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ScoutError::Search(Box::new(e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::search(format!(
                "Custom Search API error {}: {}",
                status, body
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::Search(Box::new(e.without_url())))?;

        Ok(into_evidence(parsed, limit))
    }
}

fn into_evidence(response: SearchResponse, limit: usize) -> Vec<EvidenceItem> {
    response
        .items
        .into_iter()
        .take(limit)
        .map(|hit| EvidenceItem::new(hit.title, hit.link, hit.snippet))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_biases_toward_authoritative_sources() {
        let query = build_query("NE555");
        assert!(query.starts_with("\"NE555\" ("));
        assert!(query.contains("datasheet"));
        assert!(query.contains("site:digikey.com"));
        assert!(query.contains("site:mouser.com"));
        assert!(query.contains("filetype:pdf"));
        assert!(query.ends_with(')'));
    }

    #[test]
    fn test_response_mapping_truncates_and_fills_missing_fields() {
        let raw = r#"{
            "items": [
                {"title": "NE555 datasheet", "link": "https://www.ti.com/lit/ds/symlink/ne555.pdf", "snippet": "Precision timers"},
                {"title": "NE555P Mouser", "link": "https://www.mouser.com/NE555P"},
                {"title": "third", "link": "https://example.com/3", "snippet": "x"}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        let evidence = into_evidence(parsed, 2);

        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0].title, "NE555 datasheet");
        assert_eq!(evidence[1].snippet, "");
    }

    #[test]
    fn test_response_without_items() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"kind": "customsearch#search"}"#).unwrap();
        assert!(into_evidence(parsed, 6).is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_loudly() {
        let searcher = GoogleSearch::new(SearchConfig::default()).unwrap();
        let err = searcher.search("LM317", 6).await.unwrap_err();
        assert!(matches!(
            err,
            ScoutError::MissingCredential {
                name: "GOOGLE_API_KEY"
            }
        ));

        let mut config = SearchConfig::default();
        config.api_key = Some("key".into());
        let searcher = GoogleSearch::new(config).unwrap();
        let err = searcher.search("LM317", 6).await.unwrap_err();
        assert!(matches!(
            err,
            ScoutError::MissingCredential {
                name: "GOOGLE_SEARCH_ENGINE_ID"
            }
        ));
    }
}
