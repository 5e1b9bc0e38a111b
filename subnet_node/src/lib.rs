//! SubnetScan node
//!
//! Aggregates a decentralized compute subnet's network state from one
//! upstream chain-indexing API and exposes read-only dashboard views:
//! overview figures, the incentive leaderboard, miner/validator listings,
//! pseudo-geographic map placement and a synthetic recent-activity feed.
//! Upstream responses are cached for a bounded window with single-flight
//! refresh so request bursts cost one upstream call.

pub mod api;
pub mod cache;
pub mod config;
pub mod metrics;
pub mod types;
pub mod upstream;
