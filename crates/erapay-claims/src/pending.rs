//! Pending-claim resolution.
//!
//! A validator has a pending claim for an era when it earned reward points
//! there and is not yet in the era's claimed set. An optional allow-list
//! restricts the result further; an *empty* allow-list means "no
//! restriction", never "exclude everyone".

use std::collections::HashSet;

use erapay_types::chain::EraRewardPoints;
use erapay_types::{Address, ClaimRequest, EraIndex};

/// Resolve the validators with a pending claim for `era`.
///
/// Candidate order is the reward-points iteration order; the claimed set
/// and allow-list only filter, they never reorder.
pub fn resolve_pending(
    era: EraIndex,
    reward_points: &EraRewardPoints,
    claimed: &[Address],
    allow_list: &[Address],
) -> Vec<ClaimRequest> {
    let claimed: HashSet<&str> = claimed.iter().map(String::as_str).collect();
    let allowed: HashSet<&str> = allow_list.iter().map(String::as_str).collect();

    let pending: Vec<ClaimRequest> = reward_points
        .individual
        .iter()
        .filter(|(_, points)| *points > 0)
        .filter(|(addr, _)| !claimed.contains(addr.as_str()))
        .filter(|(addr, _)| allowed.is_empty() || allowed.contains(addr.as_str()))
        .map(|(addr, _)| ClaimRequest {
            era,
            validator: addr.clone(),
        })
        .collect();

    tracing::info!(era, pending = pending.len(), "pending claims resolved");

    pending
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> EraRewardPoints {
        EraRewardPoints {
            total: 100,
            individual: vec![
                ("alice".to_string(), 50),
                ("bob".to_string(), 30),
                ("carol".to_string(), 0),
                ("dave".to_string(), 20),
            ],
        }
    }

    fn addrs(requests: &[ClaimRequest]) -> Vec<&str> {
        requests.iter().map(|r| r.validator.as_str()).collect()
    }

    #[test]
    fn test_all_eligible_minus_claimed() {
        let claimed = vec!["bob".to_string()];
        let pending = resolve_pending(9, &points(), &claimed, &[]);
        // carol earned no points, bob already claimed
        assert_eq!(addrs(&pending), vec!["alice", "dave"]);
        assert!(pending.iter().all(|r| r.era == 9));
    }

    #[test]
    fn test_empty_allow_list_means_no_restriction() {
        let pending = resolve_pending(9, &points(), &[], &[]);
        assert_eq!(addrs(&pending), vec!["alice", "bob", "dave"]);
    }

    #[test]
    fn test_allow_list_intersects_preserving_order() {
        let allow = vec!["dave".to_string(), "alice".to_string()];
        let pending = resolve_pending(9, &points(), &[], &allow);
        // Candidate order wins, not allow-list order
        assert_eq!(addrs(&pending), vec!["alice", "dave"]);
    }

    #[test]
    fn test_result_is_subset_of_allow_list() {
        let allow = vec!["bob".to_string(), "nobody".to_string()];
        let pending = resolve_pending(9, &points(), &[], &allow);
        assert_eq!(addrs(&pending), vec!["bob"]);
    }

    #[test]
    fn test_zero_point_validator_never_pending() {
        let allow = vec!["carol".to_string()];
        let pending = resolve_pending(9, &points(), &[], &allow);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_everything_claimed() {
        let claimed: Vec<Address> = ["alice", "bob", "dave"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let pending = resolve_pending(9, &points(), &claimed, &[]);
        assert!(pending.is_empty());
    }
}
