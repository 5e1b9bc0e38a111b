//! Synthetic recent-audit feed

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::errors::empty_list;
use crate::api::server::AppState;
use crate::metrics::recent_audits;

pub async fn get_recent_audits(State(state): State<AppState>) -> Response {
    match state.cache.nodes().await {
        Ok(snapshot) => {
            let mut rng = rand::thread_rng();
            Json(recent_audits(&snapshot, &mut rng)).into_response()
        }
        Err(err) => empty_list("/recent-audits", err),
    }
}
