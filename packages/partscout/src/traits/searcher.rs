//! Web searcher trait for grounding evidence.
//!
//! The searcher is the one evidence source whose misconfiguration is loud:
//! implementations return [`ScoutError::MissingCredential`] when their key is
//! absent. The aggregator still catches that and continues without evidence.
//!
//! [`ScoutError::MissingCredential`]: crate::ScoutError::MissingCredential

use async_trait::async_trait;

use crate::error::Result;
use crate::types::evidence::EvidenceItem;

/// Web search for datasheets and distributor listings of a part.
///
/// # Implementations
///
/// - `GoogleSearch` - Google Custom Search JSON API
/// - `MockWebSearcher` - For testing
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Search for evidence about `part_number`, returning at most `limit` items
    /// in ranked order.
    async fn search(&self, part_number: &str, limit: usize) -> Result<Vec<EvidenceItem>>;
}
