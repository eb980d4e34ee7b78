//! Per-part and per-batch results.

use serde::{Deserialize, Serialize};

use super::alternative::{CrossReferenceAlternative, SynthesizedAlternative};
use super::evidence::EvidenceItem;

/// Most structured candidates kept per part in batch mode.
pub const MAX_CROSS_REFERENCE_PER_PART: usize = 1;

/// Most synthesized candidates kept per part in batch mode.
pub const MAX_SYNTHESIZED_PER_PART: usize = 3;

/// Outcome of one part's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartStatus {
    Success,
    Error,
}

impl PartStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The record produced for each input part number in batch mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartResult {
    pub original_part: String,
    pub ti_alternatives: Vec<CrossReferenceAlternative>,
    pub ai_alternatives: Vec<SynthesizedAlternative>,
    pub status: PartStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PartResult {
    /// A successful part, truncating both lists to their batch-mode limits.
    pub fn succeeded(
        original_part: impl Into<String>,
        mut ti_alternatives: Vec<CrossReferenceAlternative>,
        mut ai_alternatives: Vec<SynthesizedAlternative>,
    ) -> Self {
        ti_alternatives.truncate(MAX_CROSS_REFERENCE_PER_PART);
        ai_alternatives.truncate(MAX_SYNTHESIZED_PER_PART);
        Self {
            original_part: original_part.into(),
            ti_alternatives,
            ai_alternatives,
            status: PartStatus::Success,
            error: None,
        }
    }

    /// A failed part carrying the error message.
    pub fn failed(original_part: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            original_part: original_part.into(),
            ti_alternatives: Vec::new(),
            ai_alternatives: Vec::new(),
            status: PartStatus::Error,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PartStatus::Success
    }
}

/// A part whose pipeline failed outright (not a tolerated source failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchError {
    pub part_number: String,
    pub error: String,
}

/// Aggregate over one batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub results: Vec<PartResult>,
    pub errors: Vec<BatchError>,
    pub total_processed: usize,
    pub success_count: usize,
    pub error_count: usize,
}

impl BatchSummary {
    /// Build a summary, deriving the counts from `results`.
    pub fn new(results: Vec<PartResult>, errors: Vec<BatchError>) -> Self {
        let success_count = results.iter().filter(|r| r.is_success()).count();
        Self {
            total_processed: results.len(),
            error_count: results.len() - success_count,
            success_count,
            results,
            errors,
        }
    }
}

/// Response of a single-part lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Narrative rendered to HTML.
    pub alternatives: String,
    /// Narrative as returned by the model (markdown).
    pub raw: String,
    pub search_results: Vec<EvidenceItem>,
    pub ti_alternatives: Vec<CrossReferenceAlternative>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::alternative::MatchType;

    #[test]
    fn test_succeeded_truncates_lists() {
        let ti = vec![
            CrossReferenceAlternative::new("LM317A", MatchType::ExactMatch),
            CrossReferenceAlternative::new("LM317B", MatchType::Compatible),
        ];
        let ai = (0..5)
            .map(|i| SynthesizedAlternative::new(format!("P{i}"), "desc", "Mfr"))
            .collect();

        let result = PartResult::succeeded("LM317", ti, ai);
        assert_eq!(result.ti_alternatives.len(), 1);
        assert_eq!(result.ti_alternatives[0].part_number, "LM317A");
        assert_eq!(result.ai_alternatives.len(), 3);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_summary_counts_add_up() {
        let summary = BatchSummary::new(
            vec![
                PartResult::succeeded("A", vec![], vec![]),
                PartResult::failed("B", "model error"),
                PartResult::succeeded("C", vec![], vec![]),
            ],
            vec![],
        );
        assert_eq!(summary.total_processed, 3);
        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.error_count, 1);
        assert_eq!(
            summary.success_count + summary.error_count,
            summary.total_processed
        );
    }

    #[test]
    fn test_serialized_shape() {
        let summary = BatchSummary::new(vec![PartResult::failed("X", "boom")], vec![]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalProcessed"], 1);
        assert_eq!(json["results"][0]["originalPart"], "X");
        assert_eq!(json["results"][0]["status"], "error");
        assert_eq!(json["results"][0]["error"], "boom");
        assert!(json["results"][0]["tiAlternatives"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_success_omits_error_field() {
        let json = serde_json::to_value(PartResult::succeeded("A", vec![], vec![])).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["status"], "success");
    }
}
