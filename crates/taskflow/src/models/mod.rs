mod demo;
mod responses;

pub use demo::{Availability, Priority, Task, TaskStatus, TeamMember};
pub use responses::{ApiHealthResponse, DashboardResponse, HealthResponse, SyncResponse};
