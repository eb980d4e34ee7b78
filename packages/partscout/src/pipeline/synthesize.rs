//! Synthesis: evidence in, alternatives out.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, ScoutError};
use crate::pipeline::parse::parse_alternatives;
use crate::pipeline::prompts::{format_alternatives_prompt, format_narrative_prompt};
use crate::traits::model::TextModel;
use crate::types::alternative::SynthesizedAlternative;

/// Long-form answer for a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeReply {
    pub markdown: String,
}

/// Builds grounded prompts and interprets the model's replies.
///
/// Errors from the model propagate unchanged; there is no retry.
#[derive(Clone)]
pub struct Synthesizer {
    model: Arc<dyn TextModel>,
}

impl Synthesizer {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Single-lookup mode: ranked narrative as markdown.
    pub async fn narrative(
        &self,
        part_number: &str,
        web_evidence: &str,
        cross_reference: &str,
    ) -> Result<NarrativeReply> {
        let prompt = format_narrative_prompt(part_number, web_evidence, cross_reference);
        let reply = self.complete(part_number, &prompt).await?;
        Ok(NarrativeReply { markdown: reply })
    }

    /// Batch mode: up to three parsed alternatives.
    ///
    /// A non-blank reply with no conforming lines yields an empty list.
    pub async fn alternatives(
        &self,
        part_number: &str,
        web_evidence: &str,
        cross_reference: &str,
    ) -> Result<Vec<SynthesizedAlternative>> {
        let prompt = format_alternatives_prompt(part_number, web_evidence, cross_reference);
        let reply = self.complete(part_number, &prompt).await?;

        let alternatives = parse_alternatives(&reply);
        debug!(
            part_number,
            parsed = alternatives.len(),
            reply_lines = reply.lines().count(),
            "Parsed synthesized alternatives"
        );
        Ok(alternatives)
    }

    async fn complete(&self, part_number: &str, prompt: &str) -> Result<String> {
        debug!(
            part_number,
            model = self.model.name(),
            prompt_chars = prompt.len(),
            "Requesting synthesis"
        );

        let reply = self.model.generate(prompt).await?;
        if reply.trim().is_empty() {
            return Err(ScoutError::EmptyReply);
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTextModel;

    #[tokio::test]
    async fn test_alternatives_parses_reply() {
        let model = Arc::new(MockTextModel::new().with_reply(
            "1. TLC555 - CMOS timer - Texas Instruments\nnot a candidate\n2. ICM7555 - CMOS timer - Renesas",
        ));
        let synthesizer = Synthesizer::new(model.clone());

        let alternatives = synthesizer.alternatives("NE555", "web", "xref").await.unwrap();
        assert_eq!(alternatives.len(), 2);

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("NE555"));
        assert!(prompts[0].contains("web"));
        assert!(prompts[0].contains("xref"));
    }

    #[tokio::test]
    async fn test_blank_reply_is_an_error() {
        let synthesizer = Synthesizer::new(Arc::new(MockTextModel::new().with_reply("  \n ")));
        let err = synthesizer.narrative("NE555", "", "").await.unwrap_err();
        assert!(matches!(err, ScoutError::EmptyReply));
    }

    #[tokio::test]
    async fn test_model_error_propagates() {
        let synthesizer = Synthesizer::new(Arc::new(MockTextModel::new().failing("quota exceeded")));
        let err = synthesizer.alternatives("NE555", "", "").await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_narrative_returns_markdown_verbatim() {
        let synthesizer =
            Synthesizer::new(Arc::new(MockTextModel::new().with_reply("## TLC555\nCMOS")));
        let reply = synthesizer.narrative("NE555", "", "").await.unwrap();
        assert_eq!(reply.markdown, "## TLC555\nCMOS");
    }
}
