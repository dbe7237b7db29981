//! Claim batching.
//!
//! Partitions an ordered claim list into chunks of at most `chunk_size`,
//! preserving order: concatenating the chunks reproduces the input exactly.
//! Submission of the resulting batches is the runner's job.

use erapay_types::ClaimRequest;

use crate::{ClaimError, Result};

/// Split `requests` into order-preserving chunks of at most `chunk_size`.
///
/// # Errors
///
/// [`ClaimError::InvalidChunkSize`] when `chunk_size` is 0.
pub fn chunk_claims(
    requests: &[ClaimRequest],
    chunk_size: usize,
) -> Result<Vec<Vec<ClaimRequest>>> {
    if chunk_size == 0 {
        return Err(ClaimError::InvalidChunkSize(chunk_size));
    }

    let batches: Vec<Vec<ClaimRequest>> = requests
        .chunks(chunk_size)
        .map(|chunk| chunk.to_vec())
        .collect();

    tracing::debug!(
        claims = requests.len(),
        chunk_size,
        batches = batches.len(),
        "claims batched"
    );

    Ok(batches)
}
