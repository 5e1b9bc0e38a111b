//! HTTP boundary: a thin forwarding shim over the read operations

pub mod errors;
pub mod handlers;
pub mod server;

pub use server::{create_router, start_api_server, AppState};
