//! Self-issued session credentials.
//!
//! A credential is an HS256-signed JWT carrying the provider user id and the
//! provider access token. Nothing is stored server-side: a credential is valid
//! exactly when its signature checks out and `exp` is in the future.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use taskflow_core::auth::{calculate_expiry, is_claims_expired, AuthError, Result, SessionClaims};

/// Signs and verifies session credentials with one symmetric secret.
#[derive(Clone)]
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl SessionTokens {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        // Expiry is checked against our own clock in `validate_at`, with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::hours(24)),
        }
    }

    /// Issue a credential for `user_id` embedding `access_token`, valid from now.
    pub fn issue(&self, user_id: &str, access_token: &str) -> Result<String> {
        self.issue_at(user_id, access_token, Utc::now())
    }

    /// Issue a credential as if the current time were `now`.
    pub fn issue_at(&self, user_id: &str, access_token: &str, now: DateTime<Utc>) -> Result<String> {
        let claims = SessionClaims {
            user_id: user_id.to_string(),
            access_token: access_token.to_string(),
            iat: now.timestamp(),
            exp: calculate_expiry(now, self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }

    /// Verify a credential against the current time.
    pub fn validate(&self, token: &str) -> Result<SessionClaims> {
        self.validate_at(token, Utc::now())
    }

    /// Verify a credential as if the current time were `now`.
    ///
    /// Every failure is reported as `InvalidToken`; the cause is only logged.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token rejected");
                AuthError::InvalidToken
            })?
            .claims;

        if is_claims_expired(&claims, now) {
            tracing::debug!(exp = claims.exp, "Session token expired");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}
