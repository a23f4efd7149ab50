use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// A demo task shown on the public board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assignee: String,
    pub created_at: DateTime<Utc>,
    /// Calendar date, `YYYY-MM-DD`.
    pub due_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
}

/// A demo team member with their current workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Initials rendered in place of a picture.
    pub avatar: String,
    pub status: Availability,
    pub current_tasks: u32,
    pub max_tasks: u32,
    pub workload_percentage: f64,
}

impl TeamMember {
    /// Share of capacity in use, in percent.
    pub fn workload(current_tasks: u32, max_tasks: u32) -> f64 {
        if max_tasks == 0 {
            return 0.0;
        }
        f64::from(current_tasks) * 100.0 / f64::from(max_tasks)
    }
}
