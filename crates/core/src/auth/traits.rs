use async_trait::async_trait;
use url::Url;

use super::{AuthError, PendingAuthorization, Provider, ProviderIdentity, TokenGrant};
use crate::workspace::Team;

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Abstraction over the OAuth provider's endpoints.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Authorization URL the user is sent to, carrying `state`.
    fn authorization_url(&self, state: &str) -> Result<Url>;

    /// Exchange an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<TokenGrant>;

    /// Resolve the user behind an access token.
    async fn fetch_identity(&self, access_token: &str) -> Result<ProviderIdentity>;

    /// List the workspaces (teams) the access token was authorized for.
    async fn list_teams(&self, access_token: &str) -> Result<Vec<Team>>;

    /// Which provider this client represents.
    fn provider(&self) -> Provider;
}

/// Storage for authorization attempts awaiting their callback.
#[async_trait]
pub trait AuthorizationStore: Send + Sync {
    /// Record a freshly issued state value.
    async fn store_authorization(&self, state: &str, pending: &PendingAuthorization)
        -> Result<()>;

    /// Retrieve and delete the record for `state`.
    async fn take_authorization(&self, state: &str) -> Result<Option<PendingAuthorization>>;
}
