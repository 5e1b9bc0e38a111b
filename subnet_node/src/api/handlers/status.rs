//! Health check

use axum::{response::Json, extract::State};
use chrono::Utc;
use serde_json::{json, Value};

use crate::api::server::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "subnetscan-api",
        "version": env!("CARGO_PKG_VERSION"),
        "netuid": state.netuid,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
