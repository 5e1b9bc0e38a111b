//! Network map

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::errors::error_object;
use crate::api::server::AppState;
use crate::metrics::network_map;

pub async fn get_network_map(State(state): State<AppState>) -> Response {
    match state.cache.nodes().await {
        Ok(snapshot) => Json(network_map(&snapshot)).into_response(),
        Err(err) => error_object("/network/map", err),
    }
}
