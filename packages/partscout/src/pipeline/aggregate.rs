//! Per-part aggregation.
//!
//! Runs the three sources for one part number, strictly in sequence:
//!
//! 1. web evidence (degrades to empty on any failure, including missing keys)
//! 2. manufacturer cross-reference (degrades to empty)
//! 3. synthesis (failure fails the part / request)

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{Result, ScoutError};
use crate::pipeline::prompts::{format_cross_reference_evidence, format_web_evidence};
use crate::pipeline::render::render_markdown;
use crate::pipeline::synthesize::Synthesizer;
use crate::traits::{
    cross_reference::CrossReferenceSource, model::TextModel, processor::PartProcessor,
    searcher::WebSearcher,
};
use crate::types::alternative::CrossReferenceAlternative;
use crate::types::config::ScoutConfig;
use crate::types::evidence::EvidenceItem;
use crate::types::result::{LookupResult, PartResult};

/// Longest part number accepted.
const MAX_PART_NUMBER_LEN: usize = 64;

/// Orchestrates the sources for one part number.
///
/// Holds no per-request state; one instance can serve concurrent requests,
/// each of which owns its own rendering session.
#[derive(Clone)]
pub struct Aggregator {
    searcher: Arc<dyn WebSearcher>,
    cross_reference: Arc<dyn CrossReferenceSource>,
    synthesizer: Synthesizer,
    config: ScoutConfig,
}

impl Aggregator {
    pub fn new(
        searcher: Arc<dyn WebSearcher>,
        cross_reference: Arc<dyn CrossReferenceSource>,
        model: Arc<dyn TextModel>,
        config: ScoutConfig,
    ) -> Self {
        Self {
            searcher,
            cross_reference,
            synthesizer: Synthesizer::new(model),
            config,
        }
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Single lookup: narrative plus the evidence it was grounded on.
    ///
    /// Evidence failures degrade; synthesis failures fail the request.
    pub async fn lookup(&self, part_number: &str) -> Result<LookupResult> {
        let part = normalize_part_number(part_number)?;
        info!(part_number = %part, "Starting single lookup");

        let search_results = self.gather_evidence(&part).await;
        let ti_alternatives = self.gather_cross_reference(&part).await;

        let reply = self
            .synthesizer
            .narrative(
                &part,
                &format_web_evidence(&search_results),
                &format_cross_reference_evidence(&ti_alternatives),
            )
            .await?;

        info!(
            part_number = %part,
            evidence = search_results.len(),
            cross_reference = ti_alternatives.len(),
            "Single lookup complete"
        );

        Ok(LookupResult {
            alternatives: render_markdown(&reply.markdown),
            raw: reply.markdown,
            search_results,
            ti_alternatives,
        })
    }

    /// Batch-mode record for one part.
    ///
    /// Synthesis failure is encoded as `status: error`; only an unusable part
    /// number returns `Err`.
    pub async fn aggregate(&self, part_number: &str) -> Result<PartResult> {
        let part = normalize_part_number(part_number)?;

        let evidence = self.gather_evidence(&part).await;
        let cross_reference = self.gather_cross_reference(&part).await;

        let synthesized = self
            .synthesizer
            .alternatives(
                &part,
                &format_web_evidence(&evidence),
                &format_cross_reference_evidence(&cross_reference),
            )
            .await;

        match synthesized {
            Ok(ai_alternatives) => {
                info!(
                    part_number = %part,
                    evidence = evidence.len(),
                    cross_reference = cross_reference.len(),
                    synthesized = ai_alternatives.len(),
                    "Part processed"
                );
                Ok(PartResult::succeeded(part, cross_reference, ai_alternatives))
            }
            Err(e) => {
                warn!(part_number = %part, error = %e, "Synthesis failed");
                Ok(PartResult::failed(part, e.to_string()))
            }
        }
    }

    async fn gather_evidence(&self, part: &str) -> Vec<EvidenceItem> {
        match self
            .searcher
            .search(part, self.config.search.result_count)
            .await
        {
            Ok(mut items) => {
                items.truncate(self.config.search.result_count);
                items
            }
            Err(e) => {
                warn!(part_number = %part, error = %e, "Web evidence unavailable, continuing without it");
                Vec::new()
            }
        }
    }

    async fn gather_cross_reference(&self, part: &str) -> Vec<CrossReferenceAlternative> {
        match self.cross_reference.alternatives(part).await {
            Ok(alternatives) => alternatives,
            Err(e) => {
                warn!(part_number = %part, error = %e, "Cross-reference unavailable, continuing without it");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl PartProcessor for Aggregator {
    async fn process_part(&self, part_number: &str) -> Result<PartResult> {
        self.aggregate(part_number).await
    }
}

fn normalize_part_number(part_number: &str) -> Result<String> {
    let part = part_number.trim();
    if part.is_empty() {
        return Err(ScoutError::InvalidPart {
            reason: "part number is blank".to_string(),
        });
    }
    if part.chars().count() > MAX_PART_NUMBER_LEN {
        return Err(ScoutError::InvalidPart {
            reason: format!("part number longer than {} characters", MAX_PART_NUMBER_LEN),
        });
    }
    Ok(part.to_string())
}
