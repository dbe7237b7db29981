//! # erapay-claims
//!
//! Pending-claim resolution and claim batching.
//!
//! ## Modules
//!
//! - [`pending`] — Which validators still have an unclaimed reward
//! - [`batch`] — Partitioning claims into bounded transaction batches

pub mod batch;
pub mod pending;

/// Error types for claim operations.
#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    /// Batch chunk size must be at least 1.
    #[error("invalid chunk size {0}: must be positive")]
    InvalidChunkSize(usize),
}

/// Convenience result type for claim operations.
pub type Result<T> = std::result::Result<T, ClaimError>;
