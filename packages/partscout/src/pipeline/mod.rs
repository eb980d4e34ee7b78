//! Lookup pipeline.
//!
//! - Prompt construction from part number + evidence
//! - Reply parsing (lossy, line-anchored)
//! - Synthesis (narrative and enumerated modes)
//! - Per-part aggregation with per-source failure isolation
//! - Sequential batch orchestration
//! - Tabular export and upload parsing

pub mod aggregate;
pub mod batch;
pub mod export;
pub mod parse;
pub mod prompts;
pub mod render;
pub mod synthesize;
pub mod upload;

pub use aggregate::Aggregator;
pub use batch::run_batch;
pub use export::{ExportTable, EXPORT_HEADERS};
pub use parse::parse_alternatives;
pub use prompts::{
    format_alternatives_prompt, format_cross_reference_evidence, format_narrative_prompt,
    format_web_evidence, NO_CROSS_REFERENCE_RESULTS, NO_WEB_RESULTS,
};
pub use render::render_markdown;
pub use synthesize::{NarrativeReply, Synthesizer};
pub use upload::parse_part_list;
