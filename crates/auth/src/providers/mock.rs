//! Mock OAuth provider for development and testing.
//!
//! This module provides a scripted implementation of `ProviderClient` that
//! never touches the network.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use taskflow_core::auth::{
    AuthError, Provider, ProviderClient, ProviderIdentity, Result, TokenGrant,
};
use taskflow_core::workspace::Team;
use url::Url;

/// Mock provider that answers from a fixed script.
///
/// Any code is accepted by `exchange_code` unless the exchange is set to
/// fail. Only the scripted access token is accepted by the user-scoped calls.
#[derive(Clone)]
pub struct MockProvider {
    authorize_url: String,
    access_token: String,
    identity: ProviderIdentity,
    teams: Vec<Team>,
    exchange_failure: Option<u16>,
    identity_failure: Option<u16>,
    exchange_calls: Arc<AtomicUsize>,
    identity_calls: Arc<AtomicUsize>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a MockProvider that signs in user `42` with access token `tok1`.
    pub fn new() -> Self {
        Self {
            authorize_url: "http://localhost:3001/clickup/authorize".to_string(),
            access_token: "tok1".to_string(),
            identity: ProviderIdentity {
                id: "42".to_string(),
                username: Some("mock-user".to_string()),
                email: Some("mock-user@example.com".to_string()),
            },
            teams: Vec::new(),
            exchange_failure: None,
            identity_failure: None,
            exchange_calls: Arc::new(AtomicUsize::new(0)),
            identity_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    pub fn with_user_id(mut self, id: impl Into<String>) -> Self {
        self.identity.id = id.into();
        self
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    /// Make the token endpoint answer with `status`.
    pub fn failing_exchange(mut self, status: u16) -> Self {
        self.exchange_failure = Some(status);
        self
    }

    /// Make `GET /user` answer with `status`.
    pub fn failing_identity(mut self, status: u16) -> Self {
        self.identity_failure = Some(status);
        self
    }

    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    fn check_token(&self, access_token: &str) -> Result<()> {
        if access_token == self.access_token {
            Ok(())
        } else {
            Err(AuthError::ProviderApi { status: 401 })
        }
    }
}

#[async_trait]
impl ProviderClient for MockProvider {
    fn authorization_url(&self, state: &str) -> Result<Url> {
        let mut url = Url::parse(&self.authorize_url)
            .map_err(|e| AuthError::Provider(format!("invalid authorize URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("client_id", "mock-client")
            .append_pair("state", state);
        Ok(url)
    }

    async fn exchange_code(&self, _code: &str) -> Result<TokenGrant> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.exchange_failure {
            return Err(AuthError::Exchange(format!(
                "token endpoint returned {status}"
            )));
        }

        Ok(TokenGrant {
            access_token: self.access_token.clone(),
            token_type: Some("Bearer".to_string()),
        })
    }

    async fn fetch_identity(&self, access_token: &str) -> Result<ProviderIdentity> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.identity_failure {
            return Err(AuthError::ProviderApi { status });
        }

        self.check_token(access_token)?;
        Ok(self.identity.clone())
    }

    async fn list_teams(&self, access_token: &str) -> Result<Vec<Team>> {
        self.check_token(access_token)?;
        Ok(self.teams.clone())
    }

    fn provider(&self) -> Provider {
        Provider::ClickUp
    }
}
