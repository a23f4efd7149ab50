//! Health check endpoints.
//!
//! - `/health` - Service identity and version
//! - `/api/v1/health` - API liveness

use axum::Json;
use chrono::Utc;

use crate::models::{ApiHealthResponse, HealthResponse};

/// GET /health - Service health.
///
/// Returns 200 immediately. Does not contact ClickUp.
#[axum::debug_handler]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        service: "TaskFlow Backend".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: vec![
            "clickup_integration".to_string(),
            "oauth2".to_string(),
            "real_data".to_string(),
        ],
    })
}

/// GET /api/v1/health - API health.
#[axum::debug_handler]
pub async fn api_health() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "OK".to_string(),
        service: "TaskFlow API v1".to_string(),
        timestamp: Utc::now(),
        clickup: "ready".to_string(),
    })
}
