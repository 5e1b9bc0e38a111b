//! Miner, validator and leaderboard listings

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::errors::empty_list;
use crate::api::server::AppState;
use crate::metrics::leaderboard;
use crate::types::{NodeRecord, NodeRole};

fn filter_role(snapshot: &[NodeRecord], role: NodeRole) -> Vec<NodeRecord> {
    snapshot
        .iter()
        .filter(|record| record.role == role)
        .cloned()
        .collect()
}

pub async fn get_miners(State(state): State<AppState>) -> Response {
    match state.cache.nodes().await {
        Ok(snapshot) => Json(filter_role(&snapshot, NodeRole::Miner)).into_response(),
        Err(err) => empty_list("/miners", err),
    }
}

pub async fn get_validators(State(state): State<AppState>) -> Response {
    match state.cache.nodes().await {
        Ok(snapshot) => Json(filter_role(&snapshot, NodeRole::Validator)).into_response(),
        Err(err) => empty_list("/validators", err),
    }
}

pub async fn get_leaderboard(State(state): State<AppState>) -> Response {
    match state.cache.nodes().await {
        Ok(snapshot) => Json(leaderboard(&snapshot)).into_response(),
        Err(err) => empty_list("/leaderboard", err),
    }
}
