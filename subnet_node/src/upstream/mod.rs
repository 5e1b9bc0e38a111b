//! Upstream chain-indexing API client and record normalization

pub mod client;
pub mod records;

pub use client::{HttpUpstreamClient, UpstreamApi};
pub use records::{normalize_node, RawNode};

/// Failure taxonomy for upstream calls.
///
/// The three variants stay distinguishable all the way to the HTTP boundary
/// so each endpoint can pick its degradation policy. `Clone` is required so
/// single-flight waiters can all receive the same outcome.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream unavailable during {op}: {detail}")]
    Unavailable { op: &'static str, detail: String },

    #[error("upstream rejected credentials during {op} (status {status})")]
    AuthFailed { op: &'static str, status: u16 },

    #[error("upstream response malformed during {op}: {detail}")]
    Malformed { op: &'static str, detail: String },
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
