//! Process-wide configuration, built once at startup from the environment

use serde::{Deserialize, Serialize};

/// Upstream subnet-stats provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the chain-indexing API
    pub base_url: String,
    /// API key sent in the Authorization header
    pub api_key: String,
    /// Subnet to query
    pub netuid: u16,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.subnetstats.io".to_string(),
            api_key: String::new(),
            netuid: 18,
            timeout_secs: 5,
        }
    }
}

/// Freshness policy for cached upstream responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL window in seconds; requests inside it never call upstream
    pub ttl_secs: u64,
    /// Secondary stale-but-usable window in seconds served when a refresh
    /// fails; `None` means fail-fast
    pub stale_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 30,
            stale_secs: None,
        }
    }
}

/// Node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
    /// Port the API server listens on
    pub api_port: u16,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = UpstreamConfig::default();
        let upstream = UpstreamConfig {
            base_url: std::env::var("SUBNETSCAN_UPSTREAM_URL").unwrap_or(defaults.base_url),
            api_key: std::env::var("SUBNETSCAN_API_KEY").unwrap_or(defaults.api_key),
            netuid: std::env::var("SUBNETSCAN_NETUID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.netuid),
            timeout_secs: std::env::var("SUBNETSCAN_UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        };

        let cache_defaults = CacheConfig::default();
        let cache = CacheConfig {
            ttl_secs: std::env::var("SUBNETSCAN_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(cache_defaults.ttl_secs),
            stale_secs: std::env::var("SUBNETSCAN_CACHE_STALE_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        };

        let api_port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8090);

        Self {
            upstream,
            cache,
            api_port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig::default(),
            cache: CacheConfig::default(),
            api_port: 8090,
        }
    }
}
