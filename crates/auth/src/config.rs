use std::time::Duration;

use url::Url;

use crate::error::AuthError;

/// Shortest accepted session signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Longest accepted OAuth state lifetime, in seconds.
pub const MAX_STATE_TTL_SECS: u64 = 24 * 60 * 60;
/// Longest accepted outbound request timeout, in seconds.
pub const MAX_PROVIDER_TIMEOUT_SECS: u64 = 300;

const DEFAULT_AUTHORIZE_URL: &str = "https://app.clickup.com/api";
const DEFAULT_API_BASE_URL: &str = "https://api.clickup.com/api/v2";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Configuration for the ClickUp OAuth app.
#[derive(Clone)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: Url,
    /// Page the user is sent to for consent.
    pub authorize_url: Url,
    /// Base of the REST API, without a trailing slash.
    pub api_base_url: String,
    /// Upper bound for every outbound call to the provider.
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri.as_str())
            .field("authorize_url", &self.authorize_url.as_str())
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Complete auth configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AuthConfig {
    pub clickup: ProviderConfig,
    pub jwt_secret: String,
    pub session_ttl: Duration,
    /// How long an issued OAuth state stays redeemable.
    pub state_ttl: Duration,
    /// Landing page that receives `?token=` after a successful login.
    pub frontend_url: Url,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("clickup", &self.clickup)
            .field("jwt_secret", &"<redacted>")
            .field("session_ttl", &self.session_ttl)
            .field("state_ttl", &self.state_ttl)
            .field("frontend_url", &self.frontend_url.as_str())
            .finish()
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CLICKUP_CLIENT_ID`: ClickUp OAuth app client ID (required)
    /// - `CLICKUP_CLIENT_SECRET`: ClickUp OAuth app client secret (required)
    /// - `CLICKUP_REDIRECT_URI`: Callback URL registered with ClickUp (required)
    /// - `JWT_SECRET`: Session token signing secret, at least 32 bytes (required)
    /// - `FRONTEND_URL`: Landing page after login (default: `http://localhost:5173`)
    /// - `CLICKUP_AUTHORIZE_URL`: Consent page (default: `https://app.clickup.com/api`)
    /// - `CLICKUP_API_BASE_URL`: REST base (default: `https://api.clickup.com/api/v2`)
    /// - `PROVIDER_TIMEOUT_SECS`: Outbound request timeout (default: 30, max: 300)
    /// - `AUTH_STATE_TTL_SECS`: OAuth state lifetime (default: 600, max: 86400)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if a required variable is missing or any
    /// value fails to parse. There are no fallback secrets.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AuthError::Config(format!("{key} is not set")))
        };

        let parse_url = |key: &str, value: String| {
            Url::parse(&value).map_err(|e| AuthError::Config(format!("{key} is not a valid URL: {e}")))
        };

        let parse_secs = |key: &str, default: u64, max: u64| match lookup(key) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=max).contains(secs))
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    AuthError::Config(format!("{key} must be an integer between 1 and {max}"))
                }),
            None => Ok(Duration::from_secs(default)),
        };

        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::Config(format!(
                "JWT_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        let api_base_url = lookup("CLICKUP_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        parse_url("CLICKUP_API_BASE_URL", api_base_url.clone())?;

        let clickup = ProviderConfig {
            client_id: required("CLICKUP_CLIENT_ID")?,
            client_secret: required("CLICKUP_CLIENT_SECRET")?,
            redirect_uri: parse_url("CLICKUP_REDIRECT_URI", required("CLICKUP_REDIRECT_URI")?)?,
            authorize_url: parse_url(
                "CLICKUP_AUTHORIZE_URL",
                lookup("CLICKUP_AUTHORIZE_URL").unwrap_or_else(|| DEFAULT_AUTHORIZE_URL.to_string()),
            )?,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            timeout: parse_secs("PROVIDER_TIMEOUT_SECS", 30, MAX_PROVIDER_TIMEOUT_SECS)?,
        };

        let frontend_url = parse_url(
            "FRONTEND_URL",
            lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
        )?;

        Ok(Self {
            clickup,
            jwt_secret,
            session_ttl: Duration::from_secs(24 * 60 * 60),
            state_ttl: parse_secs("AUTH_STATE_TTL_SECS", 600, MAX_STATE_TTL_SECS)?,
            frontend_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("CLICKUP_CLIENT_ID", "client-123".to_string()),
            ("CLICKUP_CLIENT_SECRET", "shh".to_string()),
            (
                "CLICKUP_REDIRECT_URI",
                "http://localhost:3000/api/v1/auth/clickup/callback".to_string(),
            ),
            ("JWT_SECRET", "0123456789abcdef0123456789abcdef".to_string()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<AuthConfig, AuthError> {
        AuthConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn loads_required_values_and_defaults() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.clickup.client_id, "client-123");
        assert_eq!(config.clickup.client_secret, "shh");
        assert_eq!(
            config.clickup.redirect_uri.as_str(),
            "http://localhost:3000/api/v1/auth/clickup/callback"
        );
        assert_eq!(config.clickup.authorize_url.as_str(), "https://app.clickup.com/api");
        assert_eq!(config.clickup.api_base_url, "https://api.clickup.com/api/v2");
        assert_eq!(config.clickup.timeout, Duration::from_secs(30));
        assert_eq!(config.session_ttl, Duration::from_secs(86_400));
        assert_eq!(config.state_ttl, Duration::from_secs(600));
        assert_eq!(config.frontend_url.as_str(), "http://localhost:5173/");
    }

    #[test]
    fn missing_required_variables_fail() {
        for key in [
            "CLICKUP_CLIENT_ID",
            "CLICKUP_CLIENT_SECRET",
            "CLICKUP_REDIRECT_URI",
            "JWT_SECRET",
        ] {
            let mut vars = base_vars();
            vars.remove(key);
            let err = load(&vars).unwrap_err();
            assert!(err.to_string().contains(key), "{key}: {err}");
        }
    }

    #[test]
    fn blank_required_variable_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("CLICKUP_CLIENT_ID", "   ".to_string());
        assert!(matches!(load(&vars), Err(AuthError::Config(_))));
    }

    #[test]
    fn short_secret_is_rejected() {
        let mut vars = base_vars();
        vars.insert("JWT_SECRET", "too-short".to_string());
        assert!(matches!(load(&vars), Err(AuthError::Config(_))));
    }

    #[test]
    fn invalid_redirect_uri_is_rejected() {
        let mut vars = base_vars();
        vars.insert("CLICKUP_REDIRECT_URI", "/relative/callback".to_string());
        assert!(matches!(load(&vars), Err(AuthError::Config(_))));
    }

    #[test]
    fn overrides_are_applied() {
        let mut vars = base_vars();
        vars.insert("CLICKUP_API_BASE_URL", "http://127.0.0.1:9999/api/v2/".to_string());
        vars.insert("FRONTEND_URL", "http://192.168.20.10:555".to_string());
        vars.insert("PROVIDER_TIMEOUT_SECS", "5".to_string());
        vars.insert("AUTH_STATE_TTL_SECS", "120".to_string());

        let config = load(&vars).unwrap();
        assert_eq!(config.clickup.api_base_url, "http://127.0.0.1:9999/api/v2");
        assert_eq!(config.frontend_url.as_str(), "http://192.168.20.10:555/");
        assert_eq!(config.clickup.timeout, Duration::from_secs(5));
        assert_eq!(config.state_ttl, Duration::from_secs(120));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut vars = base_vars();
        vars.insert("PROVIDER_TIMEOUT_SECS", "0".to_string());
        assert!(matches!(load(&vars), Err(AuthError::Config(_))));
    }

    #[test]
    fn oversized_durations_are_rejected() {
        for (key, value) in [
            ("AUTH_STATE_TTL_SECS", "9000000000000000"),
            ("AUTH_STATE_TTL_SECS", "86401"),
            ("PROVIDER_TIMEOUT_SECS", "301"),
        ] {
            let mut vars = base_vars();
            vars.insert(key, value.to_string());
            let err = load(&vars).unwrap_err();
            assert!(err.to_string().contains(key), "{key}={value}: {err}");
        }

        let mut vars = base_vars();
        vars.insert("AUTH_STATE_TTL_SECS", "86400".to_string());
        assert_eq!(load(&vars).unwrap().state_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = load(&base_vars()).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("shh"));
        assert!(!rendered.contains("0123456789abcdef"));
        assert!(rendered.contains("<redacted>"));
    }
}
