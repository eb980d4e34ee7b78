//! Alternative-part lookup library
//!
//! Finds substitute electronic components for a manufacturer part number by
//! combining three unreliable sources:
//!
//! - the manufacturer's cross-reference tool (scraped through a headless browser)
//! - a general web search biased toward datasheets and authorized distributors
//! - a generative model that turns the collected evidence into ranked alternatives
//!
//! Evidence sources are optional enrichment. If either fails, the part degrades
//! to an empty list for that source. Synthesis is the deliverable: if it fails,
//! the part (batch mode) or the request (single lookup) fails.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use partscout::{run_batch, Aggregator, ScoutConfig};
//! use partscout::sources::{GeminiModel, GoogleSearch, PlaywrightCrossReference};
//!
//! let config = ScoutConfig::default();
//! let aggregator = Aggregator::new(
//!     Arc::new(GoogleSearch::new(config.search.clone())?),
//!     Arc::new(PlaywrightCrossReference::new(config.cross_reference.clone())),
//!     Arc::new(GeminiModel::new(config.model.clone())?),
//!     config.clone(),
//! );
//!
//! let lookup = aggregator.lookup("LM317").await?;
//! let summary = run_batch(&aggregator, &["LM317".into(), "NE555".into()], &config.batch).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Seams for each external source (search, cross-reference, model, per-part pipeline)
//! - [`types`] - Evidence, alternatives, per-part results, batch summaries, configuration
//! - [`sources`] - Production adapters (Google Custom Search, Playwright, Gemini)
//! - [`dom`] - Match-type inference and anchor filtering over rendered HTML
//! - [`pipeline`] - Prompts, reply parsing, aggregation, batching, export
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod dom;
pub mod error;
pub mod pipeline;
pub mod security;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{Result, ScoutError};
pub use security::ApiKey;
pub use traits::{
    cross_reference::CrossReferenceSource, model::TextModel, processor::PartProcessor,
    searcher::WebSearcher,
};
pub use types::{
    alternative::{CrossReferenceAlternative, MatchType, SynthesizedAlternative},
    config::{BatchConfig, CrossReferenceConfig, ModelConfig, ScoutConfig, SearchConfig},
    evidence::EvidenceItem,
    result::{BatchError, BatchSummary, LookupResult, PartResult, PartStatus},
};

// Re-export pipeline components
pub use pipeline::{
    parse_alternatives, parse_part_list, render_markdown, run_batch, Aggregator, ExportTable,
    NarrativeReply, Synthesizer,
};
