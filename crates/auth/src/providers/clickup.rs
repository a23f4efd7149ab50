//! ClickUp OAuth2 provider implementation.
//!
//! ClickUp's OAuth differs from a standard OIDC provider: there is no
//! discovery document and no ID token, so identity comes from `GET /user`
//! with the freshly issued access token.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use taskflow_core::auth::{
    AuthError, Provider, ProviderClient, ProviderIdentity, Result, TokenGrant,
};
use taskflow_core::workspace::{Team, TeamsResponse};
use url::Url;

use crate::config::ProviderConfig;

/// Envelope of `GET /user`.
#[derive(Deserialize)]
struct UserResponse {
    user: ProviderIdentity,
}

/// ClickUp OAuth provider.
pub struct ClickUpProvider {
    config: ProviderConfig,
    http_client: reqwest::Client,
}

impl ClickUpProvider {
    /// Create a new ClickUp provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        // Build HTTP client without redirect following (security requirement)
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthError::Provider(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config: config.clone(),
            http_client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// GET an API path on behalf of the user and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, access_token: &str) -> Result<T> {
        let response = self
            .http_client
            .get(self.endpoint(path))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(path, status = status.as_u16(), "ClickUp API request failed");
            return Err(AuthError::ProviderApi {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| AuthError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProviderClient for ClickUpProvider {
    fn authorization_url(&self, state: &str) -> Result<Url> {
        let mut url = self.config.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", self.config.redirect_uri.as_str())
            .append_pair("state", state);
        Ok(url)
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenGrant> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
        ];

        let response = self
            .http_client
            .post(self.endpoint("/oauth/token"))
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::Exchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Exchange(format!(
                "token endpoint returned {}",
                status.as_u16()
            )));
        }

        let grant: TokenGrant = response
            .json()
            .await
            .map_err(|e| AuthError::Exchange(format!("unreadable token response: {}", e)))?;

        if grant.access_token.is_empty() {
            return Err(AuthError::Exchange(
                "token response carried an empty access_token".to_string(),
            ));
        }

        tracing::debug!(token_type = ?grant.token_type, "Exchanged authorization code");
        Ok(grant)
    }

    async fn fetch_identity(&self, access_token: &str) -> Result<ProviderIdentity> {
        let response: UserResponse = self.get_json("/user", access_token).await?;
        Ok(response.user)
    }

    async fn list_teams(&self, access_token: &str) -> Result<Vec<Team>> {
        let response: TeamsResponse = self.get_json("/team", access_token).await?;
        Ok(response.teams)
    }

    fn provider(&self) -> Provider {
        Provider::ClickUp
    }
}
