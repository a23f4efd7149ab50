//! HTTP handlers for the OAuth flow.

use axum::{
    extract::{Query, State},
    http::{header::LOCATION, HeaderName, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskflow_core::auth::{generate_state, AuthError as CoreError, PendingAuthorization};

use crate::error::AuthError;
use crate::extractors::OptionalSession;
use crate::AuthState;

/// Query parameters for OAuth callback.
///
/// Both are optional so that their absence maps to our own error bodies
/// instead of a query rejection.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Response of the start leg.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    pub auth_url: String,
    pub state: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Creates the auth router with all authentication routes.
///
/// Routes:
/// - `GET /auth/clickup/authorize` - Issue a state and the ClickUp consent URL
/// - `GET /auth/clickup/callback` - Exchange the code and redirect with a credential
/// - `GET /auth/status` - Report whether the bearer credential is valid
/// - `POST /auth/logout` - Acknowledge logout (credentials are stateless)
pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/auth/clickup/authorize", get(authorize))
        .route("/auth/clickup/callback", get(callback))
        .route("/auth/status", get(status))
        .route("/auth/logout", post(logout))
}

async fn authorize(State(state): State<AuthState>) -> Result<Json<AuthorizeResponse>, AuthError> {
    let csrf_state = generate_state()?;
    let provider = state.provider();

    let pending = PendingAuthorization {
        provider: provider.provider(),
        created_at: Utc::now(),
    };
    state
        .authorizations
        .store_authorization(&csrf_state, &pending)
        .await?;

    let auth_url = provider.authorization_url(&csrf_state)?;
    tracing::debug!(provider = %pending.provider, "Issued OAuth state");

    Ok(Json(AuthorizeResponse {
        auth_url: auth_url.into(),
        state: csrf_state,
    }))
}

async fn callback(
    State(state): State<AuthState>,
    Query(params): Query<CallbackQuery>,
) -> Result<(StatusCode, [(HeaderName, String); 1]), AuthError> {
    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or(CoreError::MissingCode)?;

    // The state is single use: taking it removes it whatever happens next.
    let csrf_state = params.state.ok_or(CoreError::InvalidState)?;
    state
        .authorizations
        .take_authorization(&csrf_state)
        .await?
        .ok_or(CoreError::InvalidState)?;

    let provider = state.provider();
    let grant = provider.exchange_code(&code).await?;
    let identity = provider.fetch_identity(&grant.access_token).await?;

    let credential = state.tokens.issue(&identity.id, &grant.access_token)?;
    tracing::info!(user_id = %identity.id, "User signed in");

    let mut redirect_url = state.config.frontend_url.clone();
    redirect_url.query_pairs_mut().append_pair("token", &credential);

    // 302 Found, which browser frontends follow with a plain GET.
    Ok((StatusCode::FOUND, [(LOCATION, redirect_url.into())]))
}

async fn status(OptionalSession(session): OptionalSession) -> (StatusCode, Json<StatusResponse>) {
    match session {
        Some(session) => (
            StatusCode::OK,
            Json(StatusResponse {
                authenticated: true,
                user_id: Some(session.user_id),
                expires_at: Some(session.expires_at),
            }),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(StatusResponse {
                authenticated: false,
                user_id: None,
                expires_at: None,
            }),
        ),
    }
}

async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}
