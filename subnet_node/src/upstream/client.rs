//! HTTP client for the external subnet-stats provider

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Duration;

use super::records::{normalize_node, normalize_subnet, RawNodesResponse, RawSubnetInfo};
use super::{Result, UpstreamError};
use crate::config::UpstreamConfig;
use crate::types::{NodeRecord, SubnetInfo};

/// Read operations against the upstream provider.
///
/// The production implementation talks HTTP; tests inject a mock to drive
/// the cache and derivation layers deterministically.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Fetch and normalize the provider's current node records
    async fn fetch_nodes(&self) -> Result<Vec<NodeRecord>>;

    /// Fetch the provider's subnet-level record
    async fn fetch_subnet_info(&self) -> Result<SubnetInfo>;
}

/// Production client, one outbound call per operation, no retries
pub struct HttpUpstreamClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    netuid: u16,
}

impl HttpUpstreamClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            netuid: config.netuid,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, op: &'static str, url: String) -> Result<T> {
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .send()
            .await
            .map_err(|e| transport_error(op, &e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            log::error!("{} rejected by upstream: status {}", op, status);
            return Err(UpstreamError::AuthFailed {
                op,
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            log::warn!("{} failed upstream: status {}", op, status);
            return Err(UpstreamError::Unavailable {
                op,
                detail: format!("status {}", status),
            });
        }

        response.json::<T>().await.map_err(|e| {
            log::warn!("{} returned an unparseable body: {}", op, e);
            UpstreamError::Malformed {
                op,
                detail: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl UpstreamApi for HttpUpstreamClient {
    async fn fetch_nodes(&self) -> Result<Vec<NodeRecord>> {
        let url = format!("{}/api/subnet/{}/nodes", self.base_url, self.netuid);
        let raw: RawNodesResponse = self.get_json("fetch_nodes", url).await?;

        // Provider order is preserved; a duplicated uid keeps its first
        // occurrence so downstream views never emit the same uid twice.
        let mut seen = HashSet::new();
        let nodes = raw
            .data
            .into_iter()
            .map(normalize_node)
            .filter(|record| seen.insert(record.uid))
            .collect();

        Ok(nodes)
    }

    async fn fetch_subnet_info(&self) -> Result<SubnetInfo> {
        let url = format!("{}/api/subnet/{}", self.base_url, self.netuid);
        let raw: RawSubnetInfo = self.get_json("fetch_subnet_info", url).await?;
        Ok(normalize_subnet(raw))
    }
}

fn transport_error(op: &'static str, err: &reqwest::Error) -> UpstreamError {
    if err.is_decode() {
        log::warn!("{} returned an unparseable body: {}", op, err);
        return UpstreamError::Malformed {
            op,
            detail: err.to_string(),
        };
    }
    let detail = if err.is_timeout() {
        "timed out".to_string()
    } else {
        err.to_string()
    };
    log::warn!("{} failed upstream: {}", op, detail);
    UpstreamError::Unavailable { op, detail }
}
