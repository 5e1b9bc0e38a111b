//! Overview aggregates

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::api::errors::error_object;
use crate::api::server::AppState;
use crate::metrics;
use crate::types::{OverviewMetrics, SubnetInfo};

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    #[serde(flatten)]
    pub metrics: OverviewMetrics,
    /// Provider subnet record when it was reachable; counts and sums above
    /// always come from the node snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<SubnetInfo>,
}

pub async fn get_overview(State(state): State<AppState>) -> Response {
    let snapshot = match state.cache.nodes().await {
        Ok(snapshot) => snapshot,
        Err(err) => return error_object("/overview", err),
    };

    // Best-effort enrichment; the overview itself never fails on this call.
    let subnet = state.cache.subnet_info().await.ok();

    Json(OverviewResponse {
        metrics: metrics::overview(&snapshot),
        subnet,
    })
    .into_response()
}
