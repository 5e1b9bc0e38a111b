//! API server wiring

use anyhow::Result;
use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{audits, netmap, nodes, overview, status};
use crate::cache::StatsCache;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<StatsCache>,
    pub netuid: u16,
}

/// Build the dashboard router with CORS open for browser clients
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(status::health))
        .route("/overview", get(overview::get_overview))
        .route("/miners", get(nodes::get_miners))
        .route("/validators", get(nodes::get_validators))
        .route("/leaderboard", get(nodes::get_leaderboard))
        .route("/network/map", get(netmap::get_network_map))
        .route("/recent-audits", get(audits::get_recent_audits))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn start_api_server(port: u16, state: AppState) -> Result<()> {
    let app = create_router(state);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    println!("✅ SubnetScan API listening on http://0.0.0.0:{}", port);
    println!("  GET  /health         - Health check");
    println!("  GET  /overview       - Subnet overview aggregates");
    println!("  GET  /miners         - Active miners");
    println!("  GET  /validators     - Validators");
    println!("  GET  /leaderboard    - Incentive leaderboard");
    println!("  GET  /network/map    - Network map placement");
    println!("  GET  /recent-audits  - Recent activity feed");

    axum::serve(listener, app).await?;
    Ok(())
}
