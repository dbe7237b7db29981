//! # erapay-rewards
//!
//! Per-era validator reward computation.
//!
//! Derives net earnings for every validator in an era from raw chain state:
//! unit conversion of 18-decimal base-unit balances, proportional reward
//! allocation by reward points, and commission splitting.
//!
//! ## Modules
//!
//! - [`units`] — Raw base-unit balance → scaled amount conversion
//! - [`aggregate`] — Per-validator earnings and era summary statistics

pub mod aggregate;
pub mod units;

/// Error types for reward computation.
#[derive(Debug, thiserror::Error)]
pub enum RewardError {
    /// A raw balance is negative or not a well-formed integer.
    #[error("invalid raw amount {value:?}: {reason}")]
    InvalidAmount {
        /// The offending input, as received.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Convenience result type for reward operations.
pub type Result<T> = std::result::Result<T, RewardError>;
