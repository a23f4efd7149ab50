use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, TryRngCore};

use super::{AuthError, PendingAuthorization, Result, SessionClaims};

/// Number of random bytes behind every OAuth state value.
pub const STATE_BYTES: usize = 32;

/// Generate a random state parameter for CSRF protection.
///
/// Draws from the operating system's CSPRNG. If the OS source fails the call
/// fails too; there is no fallback generator.
pub fn generate_state() -> Result<String> {
    let mut bytes = [0u8; STATE_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::Entropy(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Calculate expiry from issue time and TTL.
pub fn calculate_expiry(issued_at: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    issued_at + ttl
}

/// Check if session claims have expired. A credential is dead at `exp`.
pub fn is_claims_expired(claims: &SessionClaims, now: DateTime<Utc>) -> bool {
    claims.exp <= now.timestamp()
}

/// Check if a pending authorization is older than `ttl`.
pub fn is_authorization_expired(
    pending: &PendingAuthorization,
    now: DateTime<Utc>,
    ttl: Duration,
) -> bool {
    calculate_expiry(pending.created_at, ttl) <= now
}

/// Split an `Authorization` header value into its bearer token.
///
/// Only the exact `Bearer ` scheme prefix is accepted. Empty tokens are
/// treated as absent.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Provider;

    #[test]
    fn generate_state_is_url_safe_base64_of_32_bytes() {
        let state = generate_state().unwrap();
        assert_eq!(state.len(), 43);
        assert!(state
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let decoded = URL_SAFE_NO_PAD.decode(&state).unwrap();
        assert_eq!(decoded.len(), STATE_BYTES);
    }

    #[test]
    fn generate_state_is_unique() {
        let states: std::collections::HashSet<String> =
            (0..64).map(|_| generate_state().unwrap()).collect();
        assert_eq!(states.len(), 64);
    }

    #[test]
    fn calculate_expiry_adds_ttl() {
        let issued = Utc::now();
        let ttl = Duration::hours(24);
        assert_eq!(calculate_expiry(issued, ttl), issued + ttl);
    }

    fn claims_expiring_at(exp: i64) -> SessionClaims {
        SessionClaims {
            user_id: "42".to_string(),
            access_token: "tok".to_string(),
            iat: exp - 86_400,
            exp,
        }
    }

    #[test]
    fn claims_not_expired_before_exp() {
        let now = Utc::now();
        let claims = claims_expiring_at(now.timestamp() + 1);
        assert!(!is_claims_expired(&claims, now));
    }

    #[test]
    fn claims_expired_at_exact_exp() {
        let now = Utc::now();
        let claims = claims_expiring_at(now.timestamp());
        assert!(is_claims_expired(&claims, now));
    }

    #[test]
    fn claims_expired_after_exp() {
        let now = Utc::now();
        let claims = claims_expiring_at(now.timestamp() - 60);
        assert!(is_claims_expired(&claims, now));
    }

    #[test]
    fn authorization_expires_after_ttl() {
        let now = Utc::now();
        let pending = PendingAuthorization {
            provider: Provider::ClickUp,
            created_at: now - Duration::minutes(11),
        };
        assert!(is_authorization_expired(&pending, now, Duration::minutes(10)));

        let fresh = PendingAuthorization {
            provider: Provider::ClickUp,
            created_at: now - Duration::minutes(9),
        };
        assert!(!is_authorization_expired(&fresh, now, Duration::minutes(10)));
    }

    #[test]
    fn bearer_token_requires_exact_scheme() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
    }

    #[test]
    fn bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer    "), None);
    }
}
