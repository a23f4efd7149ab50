//! ClickUp OAuth2 authentication for TaskFlow.
//!
//! This crate provides:
//! - The ClickUp provider client (code exchange, identity, teams)
//! - Self-issued HS256 session credentials
//! - The Auth Gate middleware and session extractors
//! - The OAuth flow routes

mod authorizations;
mod config;
mod error;
mod extractors;
mod handlers;
mod providers;
mod state;
#[cfg(test)]
mod testing;
mod tokens;

pub use authorizations::InMemoryAuthorizationStore;
pub use config::{AuthConfig, ProviderConfig, MIN_SECRET_LEN};
pub use error::{AuthError, ErrorBody};
pub use extractors::{require_session, AuthenticatedSession, CurrentSession, OptionalSession};
pub use handlers::{auth_routes, AuthorizeResponse, MessageResponse, StatusResponse};
#[cfg(any(test, feature = "mock"))]
pub use providers::MockProvider;
pub use providers::ClickUpProvider;
pub use state::AuthState;
pub use tokens::SessionTokens;
