//! Per-part pipeline seam consumed by the batch orchestrator.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::result::PartResult;

/// Turns one part number into one [`PartResult`].
///
/// Tolerated failures (evidence sources, synthesis) are encoded in-band in the
/// returned `PartResult`. `Err` means the pipeline itself could not run for
/// this part; the batch records it separately in `BatchSummary::errors`.
#[async_trait]
pub trait PartProcessor: Send + Sync {
    async fn process_part(&self, part_number: &str) -> Result<PartResult>;
}
