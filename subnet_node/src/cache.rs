//! TTL cache over the upstream client with single-flight refresh
//!
//! One slot per logical operation. A request inside the TTL window returns
//! the cached value without touching upstream; concurrent misses collapse
//! into one upstream call and every waiter receives that call's outcome.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::config::CacheConfig;
use crate::types::{Snapshot, SubnetInfo};
use crate::upstream::{Result, UpstreamApi, UpstreamError};

struct Slot<T> {
    /// Last known-good value and the instant it was fetched
    value: Option<(T, Instant)>,
    /// Completion instant and outcome of the most recent refresh attempt
    attempt: Option<(Instant, Result<T>)>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: None,
            attempt: None,
        }
    }
}

/// One memoized upstream operation
struct CachedOp<T> {
    name: &'static str,
    ttl: Duration,
    stale: Option<Duration>,
    slot: RwLock<Slot<T>>,
    refresh: Mutex<()>,
}

impl<T: Clone> CachedOp<T> {
    fn new(name: &'static str, config: &CacheConfig) -> Self {
        Self {
            name,
            ttl: Duration::from_secs(config.ttl_secs),
            stale: config.stale_secs.map(Duration::from_secs),
            slot: RwLock::new(Slot::default()),
            refresh: Mutex::new(()),
        }
    }

    async fn get<F, Fut>(&self, fetch: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let arrived = Instant::now();

        {
            let slot = self.slot.read().await;
            if let Some((value, fetched_at)) = &slot.value {
                if fetched_at.elapsed() <= self.ttl {
                    return Ok(value.clone());
                }
            }
        }

        // Serialize refreshes; whoever holds the lock performs the single
        // upstream call for this burst.
        let _guard = self.refresh.lock().await;

        {
            let slot = self.slot.read().await;
            if let Some((value, fetched_at)) = &slot.value {
                if fetched_at.elapsed() <= self.ttl {
                    return Ok(value.clone());
                }
            }
            // A refresh finished while we waited for the lock; adopt its
            // outcome rather than issuing a second call.
            if let Some((finished_at, outcome)) = &slot.attempt {
                if *finished_at >= arrived {
                    return match outcome {
                        Ok(value) => Ok(value.clone()),
                        Err(err) => self.degrade(&slot, err.clone()),
                    };
                }
            }
        }

        let result = fetch().await;
        let finished_at = Instant::now();

        let mut slot = self.slot.write().await;
        if let Ok(value) = &result {
            slot.value = Some((value.clone(), finished_at));
        }
        slot.attempt = Some((finished_at, result.clone()));

        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                log::warn!("refresh of {} failed: {}", self.name, err);
                self.degrade(&slot, err)
            }
        }
    }

    /// On a failed refresh, serve the last known-good value while it is
    /// inside the stale window, else propagate the failure.
    fn degrade(&self, slot: &Slot<T>, err: UpstreamError) -> Result<T> {
        if let Some(stale) = self.stale {
            if let Some((value, fetched_at)) = &slot.value {
                if fetched_at.elapsed() <= self.ttl + stale {
                    log::warn!("serving stale {} after failed refresh: {}", self.name, err);
                    return Ok(value.clone());
                }
            }
        }
        Err(err)
    }
}

/// Cache over the two upstream operations.
///
/// All derived reads inside one TTL window observe the same snapshot, so a
/// dashboard issuing overview, leaderboard and map calls back-to-back sees
/// consistent node counts.
pub struct StatsCache {
    client: Arc<dyn UpstreamApi>,
    nodes: CachedOp<Snapshot>,
    subnet: CachedOp<SubnetInfo>,
}

impl StatsCache {
    pub fn new(client: Arc<dyn UpstreamApi>, config: &CacheConfig) -> Self {
        Self {
            client,
            nodes: CachedOp::new("nodes", config),
            subnet: CachedOp::new("subnet", config),
        }
    }

    /// Current node snapshot, fetched at most once per TTL window
    pub async fn nodes(&self) -> Result<Snapshot> {
        let client = self.client.clone();
        self.nodes
            .get(|| async move { client.fetch_nodes().await.map(Arc::new) })
            .await
    }

    /// Provider subnet record, fetched at most once per TTL window
    pub async fn subnet_info(&self) -> Result<SubnetInfo> {
        let client = self.client.clone();
        self.subnet
            .get(|| async move { client.fetch_subnet_info().await })
            .await
    }
}
