use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Auth errors for the taskflow_auth crate.
///
/// This wraps the core `AuthError` and adds crate-specific error variants
/// for configuration that can't be in the functional core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (flow, provider, token)
    #[error(transparent)]
    Core(#[from] taskflow_core::auth::AuthError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AuthError {
    /// Status and client-facing message for this error.
    ///
    /// Every credential failure maps to the same 401 body.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        use taskflow_core::auth::AuthError as CoreError;

        match self {
            AuthError::Core(CoreError::MissingCode) => (
                StatusCode::BAD_REQUEST,
                "No authorization code received".to_string(),
            ),
            AuthError::Core(CoreError::InvalidState) => (
                StatusCode::BAD_REQUEST,
                "Invalid or expired OAuth state".to_string(),
            ),
            AuthError::Core(CoreError::InvalidToken) => {
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string())
            }
            AuthError::Core(core_err) if core_err.is_provider_failure() => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Authentication provider error".to_string(),
            ),
            AuthError::Core(_) | AuthError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Auth error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Auth request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
