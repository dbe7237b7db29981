//! Payout gateway adapter.
//!
//! The gateway sidecar owns the chain connection, signing, and broadcast;
//! this adapter speaks JSON over HTTP to it and maps its answers onto the
//! pipeline's collaborator traits. Each submission call resolves exactly
//! once: the gateway replies only after the batch is finalized in a block
//! or has reached a terminal error.

use serde::Deserialize;
use serde_json::json;

use erapay_runner::chain::ChainQueryService;
use erapay_runner::submit::{SubmissionResult, TransactionSubmitter};
use erapay_runner::{Result, RunnerError};
use erapay_types::chain::{EraRewardPoints, StakerOverview, ValidatorPrefs};
use erapay_types::{Address, ClaimRequest, EraIndex};

/// HTTP client for the payout gateway.
#[derive(Clone)]
pub struct PayoutGateway {
    http: reqwest::Client,
    base_url: String,
    seed: String,
}

#[derive(Deserialize)]
struct CurrentEraBody {
    era: EraIndex,
}

#[derive(Deserialize)]
struct TotalStakeBody {
    total_stake: String,
}

#[derive(Deserialize)]
struct ValidatorRewardBody {
    total_validator_reward: String,
}

impl PayoutGateway {
    /// Create a gateway client for `base_url`, holding the signer seed to
    /// forward with each submission.
    pub fn new(base_url: &str, seed: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            seed: seed.to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        self.http
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| RunnerError::Query(e.to_string()))?
            .json::<T>()
            .await
            .map_err(|e| RunnerError::Query(e.to_string()))
    }
}

impl ChainQueryService for PayoutGateway {
    async fn current_era(&self) -> Result<EraIndex> {
        let body: CurrentEraBody = self.get_json("/v1/staking/current-era").await?;
        Ok(body.era)
    }

    async fn era_reward_points(&self, era: EraIndex) -> Result<EraRewardPoints> {
        self.get_json(&format!("/v1/staking/era/{era}/reward-points"))
            .await
    }

    async fn era_total_stake(&self, era: EraIndex) -> Result<String> {
        let body: TotalStakeBody = self
            .get_json(&format!("/v1/staking/era/{era}/total-stake"))
            .await?;
        Ok(body.total_stake)
    }

    async fn era_validator_reward(&self, era: EraIndex) -> Result<String> {
        let body: ValidatorRewardBody = self
            .get_json(&format!("/v1/staking/era/{era}/validator-reward"))
            .await?;
        Ok(body.total_validator_reward)
    }

    async fn era_validator_prefs(&self, era: EraIndex) -> Result<Vec<ValidatorPrefs>> {
        self.get_json(&format!("/v1/staking/era/{era}/validator-prefs"))
            .await
    }

    async fn era_stakers_overview(&self, era: EraIndex) -> Result<Vec<StakerOverview>> {
        self.get_json(&format!("/v1/staking/era/{era}/stakers-overview"))
            .await
    }

    async fn claimed_rewards(&self, era: EraIndex) -> Result<Vec<Address>> {
        self.get_json(&format!("/v1/staking/era/{era}/claimed-rewards"))
            .await
    }
}

impl TransactionSubmitter for PayoutGateway {
    async fn submit_batch(&self, claims: &[ClaimRequest]) -> Result<SubmissionResult> {
        let url = format!("{}/v1/payout/batch", self.base_url);
        let payload = json!({
            "seed": self.seed,
            "app_id": 0,
            "claims": claims,
        });

        self.http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| RunnerError::Submission(e.to_string()))?
            .json::<SubmissionResult>()
            .await
            .map_err(|e| RunnerError::Submission(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let gateway = PayoutGateway::new("http://localhost:8080/", "//seed//phrase");
        assert_eq!(gateway.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_reward_points_wire_shape() {
        // The gateway serializes individual points as [address, points] pairs
        let body = r#"{"total":100,"individual":[["alice",60],["bob",40]]}"#;
        let points: EraRewardPoints = serde_json::from_str(body).expect("deserialize");
        assert_eq!(points.total, 100);
        assert_eq!(points.points_for("alice"), 60);
        assert_eq!(points.points_for("bob"), 40);
    }

    #[test]
    fn test_submission_result_wire_shape() {
        let body = r#"{"finalized":true,"errored":false,"tx_hash":"0xab","block_hash":"0xcd"}"#;
        let result: SubmissionResult = serde_json::from_str(body).expect("deserialize");
        assert!(result.is_success());
    }
}
