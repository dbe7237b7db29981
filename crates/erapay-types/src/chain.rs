//! Raw per-era chain state, as supplied by the chain query service.
//!
//! Balances arrive in the chain's human encoding: decimal strings in the
//! minimal base unit, possibly with comma grouping (e.g. `"1,234,000"`).
//! Conversion to scaled amounts happens in `erapay-rewards`.

use serde::{Deserialize, Serialize};

use crate::{Address, EraIndex};

/// Total and per-validator reward points for one era.
///
/// `individual` preserves the chain's iteration order; the pending-claim
/// resolver derives its candidate order from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraRewardPoints {
    /// Total points awarded across all validators in the era.
    pub total: u64,
    /// Points earned per validator, in chain order. Addresses are unique.
    pub individual: Vec<(Address, u64)>,
}

impl EraRewardPoints {
    /// Points earned by `address` in this era, 0 when absent.
    pub fn points_for(&self, address: &str) -> u64 {
        self.individual
            .iter()
            .find(|(addr, _)| addr == address)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }
}

/// A validator's declared preferences for one era.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorPrefs {
    /// The validator stash address.
    pub address: Address,
    /// Commission in the chain's percent encoding, e.g. `"10.00%"`.
    pub commission: String,
    /// Whether the validator blocks new nominations.
    pub blocked: bool,
}

/// Stake overview for one validator in one era.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakerOverview {
    /// The validator stash address.
    pub address: Address,
    /// Total stake backing the validator, raw base units.
    pub total: String,
    /// The validator's own stake, raw base units.
    pub own: String,
    /// Number of nominators backing the validator.
    pub nominator_count: u32,
    /// Number of payout pages for the era.
    pub page_count: u32,
}

/// Everything the pipeline reads from the chain for a single era.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawEraData {
    /// Reward points for the era.
    pub reward_points: EraRewardPoints,
    /// Total stake across the network, raw base units.
    pub total_stake: String,
    /// Total validator reward for the era, raw base units.
    pub total_validator_reward: String,
    /// Per-validator preferences, unique per address.
    pub validator_prefs: Vec<ValidatorPrefs>,
    /// Per-validator stake overview, unique per address, chain order.
    pub stakers_overview: Vec<StakerOverview>,
    /// Validators already paid out for this era.
    pub claimed_validators: Vec<Address>,
}

impl Default for ValidatorPrefs {
    fn default() -> Self {
        Self {
            address: Address::new(),
            commission: "0.00%".to_string(),
            blocked: false,
        }
    }
}
