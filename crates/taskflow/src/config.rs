use std::{env, time::Duration};

/// Server configuration loaded from environment variables.
///
/// Auth settings live in `taskflow_auth::AuthConfig`; this only covers the
/// HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origins allowed by CORS. `None` allows any origin.
    pub cors_allowed_origins: Option<Vec<String>>,
    /// Upper bound on handling a single request (default: 60s)
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: any origin)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Self {
            cors_allowed_origins,
            request_timeout: Duration::from_secs(
                lookup("REQUEST_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(60),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cors_allowed_origins: None,
            request_timeout: Duration::from_secs(60),
        }
    }
}
