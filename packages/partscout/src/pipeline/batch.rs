//! Sequential batch orchestration.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{error, info};

use crate::error::{Result, ScoutError};
use crate::traits::processor::PartProcessor;
use crate::types::config::BatchConfig;
use crate::types::result::{BatchError, BatchSummary, PartResult};

/// Run `processor` over `part_numbers`, one part at a time.
///
/// The list is bounds-checked before any part is touched. After that nothing
/// escapes: an `Err` or a panic from the processor becomes an error row plus a
/// [`BatchError`] for that entry, and the remaining parts still run.
pub async fn run_batch<P>(
    processor: &P,
    part_numbers: &[String],
    config: &BatchConfig,
) -> Result<BatchSummary>
where
    P: PartProcessor + ?Sized,
{
    let parts: Vec<String> = part_numbers.iter().map(|p| p.trim().to_string()).collect();

    if parts.is_empty() {
        return Err(ScoutError::InvalidBatch {
            reason: "at least one part number is required".to_string(),
        });
    }
    if parts.len() > config.max_parts {
        return Err(ScoutError::InvalidBatch {
            reason: format!(
                "at most {} part numbers per batch, got {}",
                config.max_parts,
                parts.len()
            ),
        });
    }

    info!(parts = parts.len(), "Starting batch");

    let mut results = Vec::with_capacity(parts.len());
    let mut errors = Vec::new();

    for (index, part) in parts.iter().enumerate() {
        let outcome = AssertUnwindSafe(processor.process_part(part))
            .catch_unwind()
            .await;

        let failure = match outcome {
            Ok(Ok(result)) => {
                info!(
                    index,
                    part_number = %part,
                    status = result.status.as_str(),
                    "Batch part finished"
                );
                results.push(result);
                continue;
            }
            Ok(Err(e)) => e.to_string(),
            Err(panic) => format!("part processing panicked: {}", panic_message(panic.as_ref())),
        };

        error!(index, part_number = %part, error = %failure, "Batch part failed");
        results.push(PartResult::failed(part.clone(), failure.clone()));
        errors.push(BatchError {
            part_number: part.clone(),
            error: failure,
        });
    }

    let summary = BatchSummary::new(results, errors);
    info!(
        total = summary.total_processed,
        succeeded = summary.success_count,
        failed = summary.error_count,
        "Batch complete"
    );
    Ok(summary)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
