use anyhow::Result;
use std::sync::Arc;

use subnetscan_node::api::{start_api_server, AppState};
use subnetscan_node::cache::StatsCache;
use subnetscan_node::config::Config;
use subnetscan_node::upstream::HttpUpstreamClient;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    println!("🚀 Starting SubnetScan API server on port {}", config.api_port);
    log::info!(
        "upstream {} (netuid {}), cache ttl {}s, stale window {:?}",
        config.upstream.base_url,
        config.upstream.netuid,
        config.cache.ttl_secs,
        config.cache.stale_secs
    );

    let client = Arc::new(HttpUpstreamClient::new(&config.upstream)?);
    let cache = Arc::new(StatsCache::new(client, &config.cache));

    let state = AppState {
        cache,
        netuid: config.upstream.netuid,
    };

    start_api_server(config.api_port, state).await
}
