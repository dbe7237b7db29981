//! # erapay-types
//!
//! Shared domain types for the erapay payout pipeline.
//!
//! ## Modules
//!
//! - [`chain`] — Raw per-era chain state as returned by the query service

pub mod chain;

use serde::{Deserialize, Serialize};

/// SS58 stash address identifying a validator's staking identity.
pub type Address = String;

/// Era index on the staking chain.
pub type EraIndex = u32;

/// Decimal places of the chain's minimal base unit (1 token = 10^18 units).
pub const TOKEN_DECIMALS: u32 = 18;

/// Default number of past eras to inspect for unclaimed rewards.
pub const DEFAULT_CLAIM_DEPTH: u32 = 7;

/// Default number of claims bundled into one batch transaction.
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// A single unclaimed payout: one validator for one era.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// The era the reward was earned in.
    pub era: EraIndex,
    /// The validator stash to pay out.
    pub validator: Address,
}
