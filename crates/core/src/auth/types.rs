use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_id, deserialize_optional_string};

/// Supported OAuth providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    ClickUp,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClickUp => write!(f, "clickup"),
        }
    }
}

/// Claims carried by a self-issued session credential.
///
/// `iat` and `exp` are Unix timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Provider-assigned user identifier.
    pub user_id: String,
    /// Provider access token, embedded verbatim.
    pub access_token: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Access token returned by the provider's token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The authenticated user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
}

/// State recorded between the two legs of an authorization attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingAuthorization {
    pub provider: Provider,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_parses_clickup_user() {
        let body = r##"{"id": 42, "username": "somchai", "email": "somchai@example.com", "color": "#fff"}"##;
        let identity: ProviderIdentity = serde_json::from_str(body).unwrap();
        assert_eq!(identity.id, "42");
        assert_eq!(identity.username.as_deref(), Some("somchai"));
        assert_eq!(identity.email.as_deref(), Some("somchai@example.com"));
    }

    #[test]
    fn token_grant_without_token_type() {
        let grant: TokenGrant = serde_json::from_str(r#"{"access_token": "tok1"}"#).unwrap();
        assert_eq!(grant.access_token, "tok1");
        assert_eq!(grant.token_type, None);
    }

    #[test]
    fn claims_expose_timestamps() {
        let claims = SessionClaims {
            user_id: "42".to_string(),
            access_token: "tok1".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        };
        assert_eq!(claims.issued_at().unwrap().timestamp(), 1_700_000_000);
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_086_400);
    }

    #[test]
    fn provider_displays_lowercase() {
        assert_eq!(Provider::ClickUp.to_string(), "clickup");
        assert_eq!(
            serde_json::to_string(&Provider::ClickUp).unwrap(),
            r#""clickup""#
        );
    }
}
