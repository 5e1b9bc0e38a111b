//! Aggregate overview figures

use crate::types::{NodeRecord, OverviewMetrics};

/// Exact counts and sums over the snapshot, nothing sampled
pub fn overview(snapshot: &[NodeRecord]) -> OverviewMetrics {
    let active_miners = snapshot.iter().filter(|r| r.is_miner()).count();

    OverviewMetrics {
        total_nodes: snapshot.len(),
        active_miners,
        active_validators: snapshot.len() - active_miners,
        total_incentive: snapshot.iter().map(|r| r.incentive).sum(),
        total_stake: snapshot.iter().map(|r| r.stake).sum(),
    }
}
