//! Provider workspace data served to authenticated users.

mod types;

pub use types::{Team, TeamMember, TeamUser, TeamsResponse};
