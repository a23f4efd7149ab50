use thiserror::Error;

/// Failures of the OAuth flow and the session credential.
///
/// Callers map these onto HTTP statuses; the variants carrying a `String`
/// hold diagnostic detail meant for logs, never for response bodies.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no authorization code received")]
    MissingCode,

    #[error("invalid or expired OAuth state")]
    InvalidState,

    #[error("failed to exchange authorization code: {0}")]
    Exchange(String),

    #[error("provider API returned status {status}")]
    ProviderApi { status: u16 },

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("invalid session token")]
    InvalidToken,

    #[error("failed to issue session token: {0}")]
    TokenIssue(String),

    #[error("random source unavailable: {0}")]
    Entropy(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("provider error: {0}")]
    Provider(String),
}

impl AuthError {
    /// Whether the failure came from talking to the provider.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Exchange(_) | Self::ProviderApi { .. } | Self::Decode(_) | Self::Provider(_)
        )
    }
}
