//! Raw provider records and their normalization into the local model

use serde::Deserialize;

use crate::types::{NodeRecord, NodeRole, SubnetInfo};

/// Node record as the provider returns it, every field beyond the uid
/// optional so one sparse entry cannot fail a whole fetch
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub uid: u32,
    #[serde(default)]
    pub hotkey: Option<String>,
    #[serde(default)]
    pub incentive: Option<f64>,
    #[serde(default)]
    pub stake: Option<f64>,
    #[serde(default, alias = "last_update")]
    pub last_update_epoch: Option<i64>,
}

/// List envelope for the provider's metagraph endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawNodesResponse {
    #[serde(alias = "nodes")]
    pub data: Vec<RawNode>,
}

/// Subnet-level record from the provider
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubnetInfo {
    pub netuid: u16,
    #[serde(default)]
    pub block: Option<u64>,
    #[serde(default)]
    pub emission: Option<f64>,
}

/// Total conversion from one raw provider record to one `NodeRecord`.
///
/// Missing fields default deterministically and negative figures clamp to
/// zero; the role is always recomputed from the normalized incentive.
pub fn normalize_node(raw: RawNode) -> NodeRecord {
    let incentive = raw.incentive.unwrap_or(0.0).max(0.0);
    let stake = raw.stake.unwrap_or(0.0).max(0.0);
    let role = if incentive > 0.0 {
        NodeRole::Miner
    } else {
        NodeRole::Validator
    };

    NodeRecord {
        uid: raw.uid,
        hotkey: raw.hotkey.unwrap_or_default(),
        incentive,
        stake,
        last_update_epoch: raw.last_update_epoch.unwrap_or(0),
        role,
    }
}

pub fn normalize_subnet(raw: RawSubnetInfo) -> SubnetInfo {
    SubnetInfo {
        netuid: raw.netuid,
        block: raw.block.unwrap_or(0),
        emission: raw.emission.unwrap_or(0.0).max(0.0),
    }
}
