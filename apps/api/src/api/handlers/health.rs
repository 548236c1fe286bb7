use serde::Serialize;

use crate::api::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(HealthResponse { status: "ok" })
}
