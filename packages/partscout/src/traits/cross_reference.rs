//! Structured cross-reference source.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::alternative::CrossReferenceAlternative;

/// A manufacturer cross-reference lookup.
///
/// Best-effort: an empty list is a legitimate answer. The production
/// implementation (`PlaywrightCrossReference`) never returns `Err`; the
/// `Result` lets other implementations (and mocks) fail, and the aggregator
/// degrades such failures to an empty list.
#[async_trait]
pub trait CrossReferenceSource: Send + Sync {
    /// Candidates for `part_number`, in document order.
    async fn alternatives(&self, part_number: &str) -> Result<Vec<CrossReferenceAlternative>>;
}
