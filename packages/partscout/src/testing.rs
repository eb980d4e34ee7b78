//! Testing utilities including mock implementations.
//!
//! These let applications exercise the lookup pipeline without launching a
//! browser or calling search and model APIs. Every mock records its calls so
//! tests can assert what was (or was not) contacted.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::{Result, ScoutError};
use crate::traits::{
    cross_reference::CrossReferenceSource, model::TextModel, searcher::WebSearcher,
};
use crate::types::alternative::CrossReferenceAlternative;
use crate::types::evidence::EvidenceItem;

// =============================================================================
// Mock Web Searcher
// =============================================================================

/// Web searcher returning canned evidence per part number.
#[derive(Default)]
pub struct MockWebSearcher {
    results: Arc<Mutex<HashMap<String, Vec<EvidenceItem>>>>,
    failing_parts: Arc<Mutex<HashSet<String>>>,
    fail_all: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockWebSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evidence returned for `part`.
    pub fn with_results(self, part: &str, items: Vec<EvidenceItem>) -> Self {
        self.results.lock().unwrap().insert(part.to_string(), items);
        self
    }

    /// Fail searches for `part`.
    pub fn failing_for(self, part: &str) -> Self {
        self.failing_parts.lock().unwrap().insert(part.to_string());
        self
    }

    /// Fail every search with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_all = Some(message.into());
        self
    }

    /// Part numbers searched, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(&self, part_number: &str, limit: usize) -> Result<Vec<EvidenceItem>> {
        self.calls.lock().unwrap().push(part_number.to_string());

        if let Some(message) = &self.fail_all {
            return Err(ScoutError::search(message.clone()));
        }
        if self.failing_parts.lock().unwrap().contains(part_number) {
            return Err(ScoutError::search(format!("search unavailable for {}", part_number)));
        }

        let mut items = self
            .results
            .lock()
            .unwrap()
            .get(part_number)
            .cloned()
            .unwrap_or_default();
        items.truncate(limit);
        Ok(items)
    }
}

// =============================================================================
// Mock Cross-Reference Source
// =============================================================================

/// Cross-reference source returning canned candidates per part number.
#[derive(Default)]
pub struct MockCrossReference {
    alternatives: Arc<Mutex<HashMap<String, Vec<CrossReferenceAlternative>>>>,
    failing_parts: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCrossReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates returned for `part`.
    pub fn with_alternatives(self, part: &str, alternatives: Vec<CrossReferenceAlternative>) -> Self {
        self.alternatives
            .lock()
            .unwrap()
            .insert(part.to_string(), alternatives);
        self
    }

    /// Fail lookups for `part`.
    pub fn failing_for(self, part: &str) -> Self {
        self.failing_parts.lock().unwrap().insert(part.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CrossReferenceSource for MockCrossReference {
    async fn alternatives(&self, part_number: &str) -> Result<Vec<CrossReferenceAlternative>> {
        self.calls.lock().unwrap().push(part_number.to_string());

        if self.failing_parts.lock().unwrap().contains(part_number) {
            return Err(ScoutError::Browser(format!(
                "navigation timeout for {}",
                part_number
            )));
        }

        Ok(self
            .alternatives
            .lock()
            .unwrap()
            .get(part_number)
            .cloned()
            .unwrap_or_default())
    }
}

// =============================================================================
// Mock Text Model
// =============================================================================

/// Text model with scripted replies.
///
/// Per-part replies are matched against the `Original part number:` line of
/// the prompt; anything else gets the default reply.
#[derive(Default)]
pub struct MockTextModel {
    default_reply: Option<String>,
    replies: Arc<Mutex<HashMap<String, String>>>,
    failing_parts: Arc<Mutex<HashMap<String, String>>>,
    fail_all: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply used when no per-part reply matches.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.default_reply = Some(reply.into());
        self
    }

    /// Reply for prompts about `part`.
    pub fn with_reply_for(self, part: &str, reply: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(part.to_string(), reply.into());
        self
    }

    /// Fail prompts about `part` with `message`.
    pub fn failing_for(self, part: &str, message: impl Into<String>) -> Self {
        self.failing_parts
            .lock()
            .unwrap()
            .insert(part.to_string(), message.into());
        self
    }

    /// Fail every call with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_all = Some(message.into());
        self
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompt_part(prompt: &str) -> Option<&str> {
        prompt
            .lines()
            .find_map(|line| line.strip_prefix("Original part number:"))
            .map(str::trim)
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(message) = &self.fail_all {
            return Err(ScoutError::model(message.clone()));
        }

        let part = Self::prompt_part(prompt);
        if let Some(part) = part {
            if let Some(message) = self.failing_parts.lock().unwrap().get(part) {
                return Err(ScoutError::model(message.clone()));
            }
            if let Some(reply) = self.replies.lock().unwrap().get(part) {
                return Ok(reply.clone());
            }
        }

        Ok(self.default_reply.clone().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::alternative::MatchType;

    #[tokio::test]
    async fn test_mock_web_searcher_limits_and_records() {
        let searcher = MockWebSearcher::new().with_results(
            "LM317",
            vec![
                EvidenceItem::new("a", "https://a.test", ""),
                EvidenceItem::new("b", "https://b.test", ""),
                EvidenceItem::new("c", "https://c.test", ""),
            ],
        );

        let items = searcher.search("LM317", 2).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(searcher.search("NE555", 6).await.unwrap().is_empty());
        assert_eq!(searcher.calls(), vec!["LM317", "NE555"]);
    }

    #[tokio::test]
    async fn test_mock_cross_reference_failure() {
        let source = MockCrossReference::new()
            .with_alternatives(
                "NE555",
                vec![CrossReferenceAlternative::new("TLC555", MatchType::PinCompatible)],
            )
            .failing_for("LM317");

        assert!(source.alternatives("LM317").await.is_err());
        assert_eq!(source.alternatives("NE555").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_model_routes_by_part() {
        let model = MockTextModel::new()
            .with_reply("default")
            .with_reply_for("NE555", "timer reply")
            .failing_for("LM317", "boom");

        let reply = model.generate("Original part number: NE555\n...").await.unwrap();
        assert_eq!(reply, "timer reply");
        assert!(model.generate("Original part number: LM317\n").await.is_err());
        assert_eq!(model.generate("no header").await.unwrap(), "default");
        assert_eq!(model.call_count(), 3);
    }
}
