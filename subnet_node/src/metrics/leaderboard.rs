//! Leaderboard ordering

use crate::types::NodeRecord;

/// Rank a snapshot by descending incentive, ties broken by ascending uid.
///
/// Deterministic: repeated calls against an unchanged snapshot return an
/// identical ordering.
pub fn leaderboard(snapshot: &[NodeRecord]) -> Vec<NodeRecord> {
    let mut ranked = snapshot.to_vec();
    ranked.sort_by(|a, b| {
        b.incentive
            .total_cmp(&a.incentive)
            .then_with(|| a.uid.cmp(&b.uid))
    });
    ranked
}
