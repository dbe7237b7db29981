//! Chain query collaborator interface.
//!
//! The connection, RPC mechanics, and retry policy live behind this trait;
//! the pipeline only assumes each call either succeeds or reports a
//! terminal [`RunnerError::Query`]. The claimed-reward state is read once
//! per era and never cached across runs — external consistency during a
//! run is a precondition supplied by the orchestration layer.

use erapay_types::chain::{EraRewardPoints, RawEraData, StakerOverview, ValidatorPrefs};
use erapay_types::{Address, EraIndex};

use crate::Result;

/// Read-only staking state queries, per era.
pub trait ChainQueryService {
    /// The chain's active era.
    fn current_era(&self) -> impl std::future::Future<Output = Result<EraIndex>> + Send;

    /// Total and per-validator reward points for `era`.
    fn era_reward_points(
        &self,
        era: EraIndex,
    ) -> impl std::future::Future<Output = Result<EraRewardPoints>> + Send;

    /// Total network stake for `era`, raw base units.
    fn era_total_stake(
        &self,
        era: EraIndex,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Total validator reward for `era`, raw base units.
    fn era_validator_reward(
        &self,
        era: EraIndex,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Per-validator preferences for `era`.
    fn era_validator_prefs(
        &self,
        era: EraIndex,
    ) -> impl std::future::Future<Output = Result<Vec<ValidatorPrefs>>> + Send;

    /// Per-validator stake overview for `era`.
    fn era_stakers_overview(
        &self,
        era: EraIndex,
    ) -> impl std::future::Future<Output = Result<Vec<StakerOverview>>> + Send;

    /// Validators already paid out for `era`.
    fn claimed_rewards(
        &self,
        era: EraIndex,
    ) -> impl std::future::Future<Output = Result<Vec<Address>>> + Send;
}

/// Assemble the full per-era snapshot from the individual queries.
///
/// # Errors
///
/// Propagates the first [`crate::RunnerError::Query`] any query reports.
pub async fn fetch_raw_era_data<C: ChainQueryService>(
    chain: &C,
    era: EraIndex,
) -> Result<RawEraData> {
    Ok(RawEraData {
        reward_points: chain.era_reward_points(era).await?,
        total_stake: chain.era_total_stake(era).await?,
        total_validator_reward: chain.era_validator_reward(era).await?,
        validator_prefs: chain.era_validator_prefs(era).await?,
        stakers_overview: chain.era_stakers_overview(era).await?,
        claimed_validators: chain.claimed_rewards(era).await?,
    })
}
