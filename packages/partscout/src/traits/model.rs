//! Generative model trait.
//!
//! Prompting and reply parsing live in the pipeline (`pipeline::prompts`,
//! `pipeline::parse`); implementations only move text to and from a provider.

use async_trait::async_trait;

use crate::error::Result;

/// A text-in, text-out generative model.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate a reply for `prompt` (returns raw text).
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}
