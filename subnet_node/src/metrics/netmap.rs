//! Pseudo-geographic placement for the dashboard map

use crate::types::{GeoNode, NodeRecord};

/// Map rendering caps out at the first 30 snapshot entries
pub const MAX_MAP_NODES: usize = 30;

/// Deterministic pseudo-coordinates for a hotkey.
///
/// The hash is the sum of the hotkey's character codes; identical hotkeys
/// always land on identical coordinates. Not real geography: the only
/// contracts are lat in [-70, 69] and lng in [-180, 179].
pub fn geo_coordinates(hotkey: &str) -> (i64, i64) {
    let h: u64 = hotkey.chars().map(|c| c as u64).sum();
    let lat = (h % 140) as i64 - 70;
    let lng = (h % 360) as i64 - 180;
    (lat, lng)
}

/// First `MAX_MAP_NODES` records in snapshot order, placed on the map.
///
/// `status` is a fixed marker; no liveness probing happens here.
pub fn network_map(snapshot: &[NodeRecord]) -> Vec<GeoNode> {
    snapshot
        .iter()
        .take(MAX_MAP_NODES)
        .map(|record| {
            let (lat, lng) = geo_coordinates(&record.hotkey);
            GeoNode {
                id: record.uid,
                label: record.display_label(),
                lat,
                lng,
                status: "online".to_string(),
                node_type: record.role,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeRole, NodeRecord};

    #[test]
    fn coordinates_are_deterministic_and_bounded() {
        for hotkey in ["", "abc", "5F3sa2TJAWMqDhXG6jhV4N8ko9SxwGy8TpaNS1repo5EYjQX"] {
            let first = geo_coordinates(hotkey);
            let second = geo_coordinates(hotkey);
            assert_eq!(first, second);
            assert!((-70..=69).contains(&first.0), "lat out of range: {}", first.0);
            assert!((-180..=179).contains(&first.1), "lng out of range: {}", first.1);
        }
    }

    #[test]
    fn map_truncates_to_cap() {
        let snapshot: Vec<NodeRecord> = (0..50)
            .map(|uid| NodeRecord {
                uid,
                hotkey: format!("hotkey-{}", uid),
                incentive: 0.1,
                stake: 1.0,
                last_update_epoch: 0,
                role: NodeRole::Miner,
            })
            .collect();

        let map = network_map(&snapshot);
        assert_eq!(map.len(), MAX_MAP_NODES);
        // snapshot order, not leaderboard order
        assert_eq!(map[0].id, 0);
        assert_eq!(map[29].id, 29);
        assert!(map.iter().all(|n| n.status == "online"));
    }
}
