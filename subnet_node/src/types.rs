//! Core data model shared across the aggregation layers

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Role a participant plays in the subnet, derived from measured incentive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Miner,
    Validator,
}

/// One subnet participant as seen in a single snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Slot index, unique within a snapshot
    pub uid: u32,
    /// Opaque identifier, stable across snapshots
    pub hotkey: String,
    /// Measured incentive, >= 0; zero means validator-only or inactive
    pub incentive: f64,
    /// Staked amount, >= 0
    pub stake: f64,
    /// Unix seconds of the participant's last metagraph update
    pub last_update_epoch: i64,
    /// Derived from incentive, never trusted from upstream
    pub role: NodeRole,
}

impl NodeRecord {
    pub fn is_miner(&self) -> bool {
        self.role == NodeRole::Miner
    }

    /// Short display form of the hotkey for map labels and audit names
    pub fn display_label(&self) -> String {
        let short: String = self.hotkey.chars().take(10).collect();
        if self.hotkey.chars().count() > 10 {
            format!("{}…", short)
        } else {
            short
        }
    }
}

/// Immutable point-in-time capture of all node records.
///
/// Owned by the cache for the duration of its TTL and replaced wholesale on
/// refresh; readers hold a cheap clone of the `Arc` and never observe a
/// partially written snapshot.
pub type Snapshot = Arc<Vec<NodeRecord>>;

/// Aggregate dashboard figures, recomputed fresh from a snapshot per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    /// Total participants in the snapshot
    pub total_nodes: usize,
    /// Participants with nonzero incentive
    pub active_miners: usize,
    /// Participants with zero incentive
    pub active_validators: usize,
    /// Sum of incentive over the snapshot
    pub total_incentive: f64,
    /// Sum of stake over the snapshot
    pub total_stake: f64,
}

/// Raw subnet-level record from the provider, backing the overview response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubnetInfo {
    pub netuid: u16,
    /// Chain block height at the provider's last indexing pass
    pub block: u64,
    /// Current emission rate reported by the provider
    pub emission: f64,
}

/// Map rendering entry with deterministic pseudo-coordinates.
///
/// The coordinates are a hash placement, not real geography; `status` is a
/// fixed marker since no liveness probing is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoNode {
    pub id: u32,
    pub label: String,
    pub lat: i64,
    pub lng: i64,
    pub status: String,
    #[serde(rename = "type")]
    pub node_type: NodeRole,
}

/// Synthetic recent-activity entry for the dashboard feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Deterministic per uid and update epoch: `audit-{uid}-{epoch}`
    pub id: String,
    pub name: String,
    pub score: f64,
    /// RFC 3339 instant derived from the record's last update epoch
    pub timestamp: String,
    pub status: String,
}
