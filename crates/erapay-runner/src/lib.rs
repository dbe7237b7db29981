//! # erapay-runner
//!
//! Orchestration of the payout pipeline across a range of eras.
//!
//! The runner drives aggregate → resolve → batch → submit for each era in
//! ascending order, against collaborator interfaces for chain queries and
//! transaction submission. A failure in one era is recorded in that era's
//! outcome and never halts the remaining range.
//!
//! ## Modules
//!
//! - [`chain`] — Chain query collaborator interface
//! - [`submit`] — Transaction submission collaborator interface
//! - [`run`] — The per-era state machine and outcome log

pub mod chain;
pub mod run;
pub mod submit;

/// Error types for runner operations.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A chain query collaborator reported a terminal error.
    #[error("chain query failed: {0}")]
    Query(String),

    /// A batch submission collaborator reported a terminal error.
    #[error("batch submission failed: {0}")]
    Submission(String),

    /// Reward computation rejected the era's data.
    #[error(transparent)]
    Reward(#[from] erapay_rewards::RewardError),

    /// Claim batching rejected its input.
    #[error(transparent)]
    Claim(#[from] erapay_claims::ClaimError),
}

/// Convenience result type for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
