//! Application state for auth.

use std::sync::Arc;

use axum::extract::FromRef;
use taskflow_core::auth::{AuthorizationStore, ProviderClient};

use crate::authorizations::InMemoryAuthorizationStore;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::providers::ClickUpProvider;
use crate::tokens::SessionTokens;

/// Shared state for auth handlers and the Auth Gate.
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AuthConfig>,
    pub tokens: SessionTokens,
    pub authorizations: Arc<dyn AuthorizationStore>,
    clickup: Arc<dyn ProviderClient>,
}

impl AuthState {
    /// Creates the state backed by the real ClickUp API.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client cannot be built.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let clickup = ClickUpProvider::new(&config.clickup)?;
        Ok(Self::with_provider(config, Arc::new(clickup)))
    }

    /// Creates the state with an arbitrary provider client.
    pub fn with_provider(config: AuthConfig, clickup: Arc<dyn ProviderClient>) -> Self {
        let tokens = SessionTokens::new(config.jwt_secret.as_bytes(), config.session_ttl);
        let authorizations = Arc::new(InMemoryAuthorizationStore::new(config.state_ttl));

        Self {
            config: Arc::new(config),
            tokens,
            authorizations,
            clickup,
        }
    }

    /// Gets the ClickUp provider client.
    pub fn provider(&self) -> &Arc<dyn ProviderClient> {
        &self.clickup
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
