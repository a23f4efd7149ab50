//! Public demo data for visitors who have not signed in.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::{
    mock_data::{generate_mock_team, generate_mock_tasks},
    models::{Task, TeamMember},
};

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: Vec<TeamMember>,
}

/// GET /api/v1/tasks
#[axum::debug_handler]
pub async fn list_tasks() -> Json<TasksResponse> {
    Json(TasksResponse {
        tasks: generate_mock_tasks(Utc::now()),
    })
}

/// GET /api/v1/team
#[axum::debug_handler]
pub async fn list_team() -> Json<TeamResponse> {
    Json(TeamResponse {
        team: generate_mock_team(),
    })
}
