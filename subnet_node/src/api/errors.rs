//! API error rendering
//!
//! The core stays error-policy-agnostic; handlers pick between the two
//! inherited degraded renderings defined here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::upstream::UpstreamError;

/// Error object returned by endpoints that surface failures explicitly
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub error: String,
    pub timestamp: u64,
}

impl ApiError {
    pub fn new(code: u16, error: String) -> Self {
        Self {
            code,
            error,
            timestamp: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self::new(500, message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Degraded rendering for endpoints documented to surface an error object
pub fn error_object(endpoint: &'static str, err: UpstreamError) -> Response {
    log::error!("{} failed: {}", endpoint, err);
    ApiError::internal_server_error(&err.to_string()).into_response()
}

/// Degraded rendering for endpoints documented to return an empty list.
/// Still HTTP 500 so clients never need to parse the body to detect
/// failure.
pub fn empty_list(endpoint: &'static str, err: UpstreamError) -> Response {
    log::error!("{} failed: {}", endpoint, err);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!([]))).into_response()
}
