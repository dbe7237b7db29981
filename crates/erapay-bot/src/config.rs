//! Environment-supplied configuration.
//!
//! All four credentials are required; a missing one is a startup error,
//! raised before any chain work begins. The optional knobs fall back to
//! the operational defaults.

use std::env;

use erapay_types::{Address, DEFAULT_CHUNK_SIZE, DEFAULT_CLAIM_DEPTH};

/// Configuration errors, all fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// An optional environment variable has an unusable value.
    #[error("environment variable {name} is invalid: {reason}")]
    InvalidVar {
        /// The variable name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Runtime configuration for one payout run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Payout gateway base URL.
    pub endpoint: String,
    /// Signer seed forwarded to the gateway for submission.
    pub seed: String,
    /// Slack OAuth token.
    pub oath_token: String,
    /// Slack channel to post the report to.
    pub channel_id: String,
    /// Restrict payouts to these stashes; empty means all validators.
    pub validator_stashes: Vec<Address>,
    /// Claims bundled per batch transaction.
    pub chunk_size: usize,
    /// How many past eras to inspect.
    pub claim_depth: u32,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Required: `ENDPOINT`, `SEED`, `OATH_TOKEN`, `CHANNEL_ID`.
    /// Optional: `VALIDATOR_STASHES` (comma-separated), `CHUNK_SIZE`,
    /// `CLAIM_DEPTH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: required("ENDPOINT")?,
            seed: required("SEED")?,
            oath_token: required("OATH_TOKEN")?,
            channel_id: required("CHANNEL_ID")?,
            validator_stashes: stash_list(env::var("VALIDATOR_STASHES").ok()),
            chunk_size: parse_or("CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?,
            claim_depth: parse_or("CLAIM_DEPTH", DEFAULT_CLAIM_DEPTH)?,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn stash_list(raw: Option<String>) -> Vec<Address> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value.trim().parse::<T>().map_err(|e| ConfigError::InvalidVar {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
