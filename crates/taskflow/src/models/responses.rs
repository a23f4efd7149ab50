use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskflow_core::workspace::Team;

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

/// Body of `GET /api/v1/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub clickup: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub teams: Vec<Team>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SyncResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
}
