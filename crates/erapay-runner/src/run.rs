//! The per-era state machine and outcome log.
//!
//! Eras are processed strictly in ascending order, one at a time; batches
//! within an era are submitted one at a time, awaiting each terminal
//! signal before the next. This sequencing is deliberate: a later batch's
//! claim set depends on the on-chain claimed state staying externally
//! consistent for the duration of the run.

use std::fmt;

use serde::{Deserialize, Serialize};

use erapay_claims::batch::chunk_claims;
use erapay_claims::pending::resolve_pending;
use erapay_rewards::aggregate::{aggregate_era, EraSummaryStats};
use erapay_types::{Address, EraIndex};

use crate::chain::{fetch_raw_era_data, ChainQueryService};
use crate::submit::TransactionSubmitter;
use crate::{Result, RunnerError};

/// Processing phase of a single era.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EraState {
    /// Not yet started.
    Pending,
    /// Fetching chain state and computing earnings.
    Aggregating,
    /// Determining which validators still have an unclaimed reward.
    Resolving,
    /// Partitioning claims into transaction batches.
    Batching,
    /// Awaiting batch submissions.
    Submitting,
    /// Finished, with the recorded status.
    Done(EraStatus),
}

impl fmt::Display for EraState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EraState::Pending => write!(f, "pending"),
            EraState::Aggregating => write!(f, "aggregating"),
            EraState::Resolving => write!(f, "resolving"),
            EraState::Batching => write!(f, "batching"),
            EraState::Submitting => write!(f, "submitting"),
            EraState::Done(EraStatus::Success) => write!(f, "done(success)"),
            EraState::Done(EraStatus::Failed) => write!(f, "done(failed)"),
        }
    }
}

/// Final status of one era's processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EraStatus {
    /// Every batch submission for the era succeeded.
    Success,
    /// Aggregation failed or at least one batch submission failed.
    Failed,
}

/// Immutable record of one era's processing, appended per era in order.
///
/// The outcome log lives for one run and is discarded after reporting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EraOutcome {
    /// The era processed.
    pub era: EraIndex,
    /// Era summary statistics; `None` when aggregation failed.
    pub stats: Option<EraSummaryStats>,
    /// Number of validators with a pending claim in this era.
    pub pending_claims: usize,
    /// Recorded status.
    pub status: EraStatus,
}

/// Drives the payout pipeline across a contiguous era range.
pub struct EraRunner<C, S> {
    chain: C,
    submitter: S,
    chunk_size: usize,
    allow_list: Vec<Address>,
}

impl<C: ChainQueryService, S: TransactionSubmitter> EraRunner<C, S> {
    /// Create a runner.
    ///
    /// `allow_list` restricts payouts to the given stashes; empty means no
    /// restriction.
    ///
    /// # Errors
    ///
    /// [`erapay_claims::ClaimError::InvalidChunkSize`] when `chunk_size`
    /// is 0.
    pub fn new(chain: C, submitter: S, chunk_size: usize, allow_list: Vec<Address>) -> Result<Self> {
        if chunk_size == 0 {
            return Err(erapay_claims::ClaimError::InvalidChunkSize(chunk_size).into());
        }
        Ok(Self {
            chain,
            submitter,
            chunk_size,
            allow_list,
        })
    }

    /// Consume the runner, returning its collaborators.
    pub fn into_parts(self) -> (C, S) {
        (self.chain, self.submitter)
    }

    /// Process `start_era..=end_era` ascending and return one outcome per
    /// era, in order. A failed era is recorded, not fatal: later eras are
    /// always attempted.
    pub async fn run(&self, start_era: EraIndex, end_era: EraIndex) -> Vec<EraOutcome> {
        let mut outcomes = Vec::new();
        if start_era > end_era {
            tracing::warn!(start_era, end_era, "empty era range, nothing to do");
            return outcomes;
        }

        for era in start_era..=end_era {
            let outcome = self.process_era(era).await;
            tracing::info!(era, status = ?outcome.status, pending = outcome.pending_claims, "era complete");
            outcomes.push(outcome);
        }
        outcomes
    }

    async fn process_era(&self, era: EraIndex) -> EraOutcome {
        let mut state = EraState::Pending;

        self.advance(era, &mut state, EraState::Aggregating);
        let aggregated = self.aggregate(era).await;
        let (raw, stats) = match aggregated {
            Ok(value) => value,
            Err(e) => {
                // Bad era data invalidates this era only
                tracing::warn!(era, error = %e, "era aggregation failed, skipping to next era");
                self.advance(era, &mut state, EraState::Done(EraStatus::Failed));
                return EraOutcome {
                    era,
                    stats: None,
                    pending_claims: 0,
                    status: EraStatus::Failed,
                };
            }
        };

        self.advance(era, &mut state, EraState::Resolving);
        let pending = resolve_pending(
            era,
            &raw.reward_points,
            &raw.claimed_validators,
            &self.allow_list,
        );

        self.advance(era, &mut state, EraState::Batching);
        // chunk_size >= 1 is enforced at construction, so chunking cannot fail
        let batches = chunk_claims(&pending, self.chunk_size).unwrap_or_default();

        self.advance(era, &mut state, EraState::Submitting);
        let status = self.submit_batches(era, &batches).await;

        self.advance(era, &mut state, EraState::Done(status));
        EraOutcome {
            era,
            stats: Some(stats),
            pending_claims: pending.len(),
            status,
        }
    }

    /// Fetch the era's chain snapshot and compute its summary statistics.
    async fn aggregate(
        &self,
        era: EraIndex,
    ) -> Result<(erapay_types::chain::RawEraData, EraSummaryStats)> {
        let raw = fetch_raw_era_data(&self.chain, era).await?;
        let (_earnings, stats) = aggregate_era(era, &raw)?;
        Ok((raw, stats))
    }

    /// Submit every batch in order, one at a time. Any failed or errored
    /// batch marks the era failed; remaining batches are still submitted.
    async fn submit_batches(
        &self,
        era: EraIndex,
        batches: &[Vec<erapay_types::ClaimRequest>],
    ) -> EraStatus {
        let mut status = EraStatus::Success;

        for (index, batch) in batches.iter().enumerate() {
            tracing::info!(
                era,
                batch = index + 1,
                of = batches.len(),
                claims = batch.len(),
                "submitting payout batch"
            );

            match self.submitter.submit_batch(batch).await {
                Ok(result) if result.is_success() => {
                    tracing::info!(
                        era,
                        batch = index + 1,
                        tx_hash = %result.tx_hash,
                        block_hash = %result.block_hash,
                        "payout batch finalized"
                    );
                }
                Ok(result) => {
                    tracing::error!(
                        era,
                        batch = index + 1,
                        errored = result.errored,
                        finalized = result.finalized,
                        "payout batch was not executed"
                    );
                    status = EraStatus::Failed;
                }
                Err(RunnerError::Submission(reason)) => {
                    tracing::error!(era, batch = index + 1, %reason, "payout batch submission error");
                    status = EraStatus::Failed;
                }
                Err(e) => {
                    tracing::error!(era, batch = index + 1, error = %e, "payout batch submission error");
                    status = EraStatus::Failed;
                }
            }
        }

        status
    }

    fn advance(&self, era: EraIndex, state: &mut EraState, next: EraState) {
        tracing::debug!(era, from = %state, to = %next, "era state");
        *state = next;
    }
}
