//! Per-era reward aggregation.
//!
//! For every validator in the era's staker overview, joins preferences and
//! reward points (absent entries default to commission 0, not blocked,
//! 0 points), allocates the era's total validator reward proportionally by
//! point share, and splits commission from the stake-proportional own
//! reward. Output order is the staker overview's chain order; callers that
//! need a ranking sort explicitly.
//!
//! Division guards are explicit branches yielding defined zeros: an era
//! with zero total reward points gives every validator a zero point share,
//! and a validator with zero total stake earns no own reward. Neither case
//! may surface as NaN or infinity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use erapay_types::chain::{RawEraData, ValidatorPrefs};
use erapay_types::{Address, EraIndex};

use crate::units::to_tokens;
use crate::Result;

/// Derived earnings for one validator in one era. Immutable once computed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidatorEraEarnings {
    /// The validator stash address.
    pub address: Address,
    /// The era the earnings were computed for.
    pub era: EraIndex,
    /// Total stake backing the validator, scaled to tokens.
    pub total_stake: f64,
    /// The validator's own stake, scaled to tokens.
    pub own_stake: f64,
    /// Commission ratio in [0, 1]; 0 when the preference entry is absent.
    pub commission_ratio: f64,
    /// Whether the validator blocks nominations; false when absent.
    pub blocked: bool,
    /// Reward points earned; 0 when absent from the points map.
    pub reward_points: u64,
    /// This validator's share of the era's total points, in [0, 1].
    pub point_share: f64,
    /// Era reward allocated to this validator before splitting.
    pub total_validator_reward: f64,
    /// Commission portion retained by the validator.
    pub commission_earned: f64,
    /// Stake-proportional reward on the validator's own stake.
    pub own_reward: f64,
    /// `commission_earned + own_reward`.
    pub net_earnings: f64,
    /// Number of nominators backing the validator.
    pub nominator_count: u32,
    /// Number of payout pages for the era.
    pub page_count: u32,
}

/// Spread of net earnings and commission across an era's validator set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarningsSpread {
    /// Highest net earnings in the era.
    pub max_net: f64,
    /// Lowest net earnings in the era.
    pub min_net: f64,
    /// Mean net earnings across the era.
    pub avg_net: f64,
    /// Highest commission, as a percentage.
    pub max_commission_pct: f64,
    /// Lowest commission, as a percentage.
    pub min_commission_pct: f64,
}

/// Era-level summary reduced over the earnings sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EraSummaryStats {
    /// Total network stake for the era, scaled to tokens.
    pub total_stake: f64,
    /// Total validator reward for the era, scaled to tokens.
    pub total_validator_reward: f64,
    /// Set when the era awarded zero reward points; every point share is 0.
    pub no_distributable_reward: bool,
    /// Earnings spread; `None` when the validator set is empty (the
    /// explicit "no data" marker — never NaN extrema).
    pub earnings: Option<EarningsSpread>,
}

/// Compute per-validator earnings and summary statistics for one era.
///
/// # Errors
///
/// [`crate::RewardError::InvalidAmount`] if any raw balance in the era's
/// data is malformed; the error invalidates this era only.
pub fn aggregate_era(
    era: EraIndex,
    raw: &RawEraData,
) -> Result<(Vec<ValidatorEraEarnings>, EraSummaryStats)> {
    let total_stake = to_tokens(&raw.total_stake)?;
    let total_validator_reward = to_tokens(&raw.total_validator_reward)?;

    let total_points = raw.reward_points.total;
    let points_by_address: HashMap<&str, u64> = raw
        .reward_points
        .individual
        .iter()
        .map(|(addr, points)| (addr.as_str(), *points))
        .collect();
    let prefs_by_address: HashMap<&str, &ValidatorPrefs> = raw
        .validator_prefs
        .iter()
        .map(|prefs| (prefs.address.as_str(), prefs))
        .collect();

    let default_prefs = ValidatorPrefs::default();
    let mut earnings = Vec::with_capacity(raw.stakers_overview.len());

    for overview in &raw.stakers_overview {
        let prefs = prefs_by_address
            .get(overview.address.as_str())
            .copied()
            .unwrap_or(&default_prefs);
        let reward_points = points_by_address
            .get(overview.address.as_str())
            .copied()
            .unwrap_or(0);

        // Zero total points: defined zero share for everyone, no division
        let point_share = if total_points == 0 {
            0.0
        } else {
            reward_points as f64 / total_points as f64
        };

        let validator_total_stake = to_tokens(&overview.total)?;
        let own_stake = to_tokens(&overview.own)?;
        let commission_ratio = parse_commission(&prefs.commission);

        let validator_reward = total_validator_reward * point_share;
        let commission_earned = validator_reward * commission_ratio;
        // Zero stake: defined zero own reward, no division
        let own_reward = if validator_total_stake == 0.0 {
            0.0
        } else {
            (validator_reward - commission_earned) * own_stake / validator_total_stake
        };
        let net_earnings = commission_earned + own_reward;

        earnings.push(ValidatorEraEarnings {
            address: overview.address.clone(),
            era,
            total_stake: validator_total_stake,
            own_stake,
            commission_ratio,
            blocked: prefs.blocked,
            reward_points,
            point_share,
            total_validator_reward: validator_reward,
            commission_earned,
            own_reward,
            net_earnings,
            nominator_count: overview.nominator_count,
            page_count: overview.page_count,
        });
    }

    let stats = EraSummaryStats {
        total_stake,
        total_validator_reward,
        no_distributable_reward: total_points == 0,
        earnings: reduce_spread(&earnings),
    };

    tracing::info!(
        era,
        validators = earnings.len(),
        total_points,
        "era aggregated"
    );

    Ok((earnings, stats))
}

/// Parse the chain's `"X.YZ%"` commission encoding into a ratio in [0, 1].
///
/// Absent or unparsable input defaults to 0, preserving the source
/// behavior exactly; out-of-range values clamp into [0, 1].
pub fn parse_commission(commission: &str) -> f64 {
    let ratio = commission
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .map(|pct| pct / 100.0)
        .unwrap_or(0.0);
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Reduce the earnings sequence to its spread; `None` for an empty set.
fn reduce_spread(earnings: &[ValidatorEraEarnings]) -> Option<EarningsSpread> {
    if earnings.is_empty() {
        return None;
    }

    let sum: f64 = earnings.iter().map(|e| e.net_earnings).sum();
    let max_net = earnings
        .iter()
        .map(|e| e.net_earnings)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_net = earnings
        .iter()
        .map(|e| e.net_earnings)
        .fold(f64::INFINITY, f64::min);
    let max_commission_pct = earnings
        .iter()
        .map(|e| e.commission_ratio * 100.0)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_commission_pct = earnings
        .iter()
        .map(|e| e.commission_ratio * 100.0)
        .fold(f64::INFINITY, f64::min);

    Some(EarningsSpread {
        max_net,
        min_net,
        avg_net: sum / earnings.len() as f64,
        max_commission_pct,
        min_commission_pct,
    })
}
