use axum::{extract::State, Json};
use taskflow_auth::{AuthError, CurrentSession};

use crate::{models::DashboardResponse, state::AppState};

/// GET /api/v1/dashboard - The caller's ClickUp workspaces.
///
/// Uses the ClickUp access token embedded in the session credential.
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<DashboardResponse>, AuthError> {
    let teams = state
        .auth
        .provider()
        .list_teams(&session.access_token)
        .await?;

    tracing::debug!(user_id = %session.user_id, teams = teams.len(), "Fetched dashboard teams");

    Ok(Json(DashboardResponse {
        teams,
        message: "Dashboard data from ClickUp".to_string(),
    }))
}
