//! Transaction submission collaborator interface.
//!
//! Signing material and broadcast mechanics are held by the implementation;
//! the pipeline hands it an ordered claim batch and waits for exactly one
//! terminal signal: finalized-in-block or error. No timeout is imposed
//! here; a bounded wait per submission is a recommended hardening for
//! production deployments.

use serde::{Deserialize, Serialize};

use erapay_types::ClaimRequest;

use crate::Result;

/// Terminal outcome of one batch submission.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// The batch transaction was included and finalized.
    pub finalized: bool,
    /// The collaborator reported a terminal error state.
    pub errored: bool,
    /// Transaction hash, when known.
    pub tx_hash: String,
    /// Block hash of inclusion, when known.
    pub block_hash: String,
}

impl SubmissionResult {
    /// Whether the batch landed: finalized and not errored.
    pub fn is_success(&self) -> bool {
        self.finalized && !self.errored
    }
}

/// Signs and broadcasts one aggregate claim transaction per call.
///
/// Must resolve exactly once per call, either success-with-confirmation or
/// a terminal [`crate::RunnerError::Submission`].
pub trait TransactionSubmitter {
    /// Submit one batch of claims as a single aggregate transaction.
    fn submit_batch(
        &self,
        claims: &[ClaimRequest],
    ) -> impl std::future::Future<Output = Result<SubmissionResult>> + Send;
}
