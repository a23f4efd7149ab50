//! The Auth Gate and the extractors that read its result.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use taskflow_core::auth::{bearer_token, SessionClaims};

use crate::error::AuthError;
use crate::AuthState;

/// A validated session, placed in request extensions by [`require_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub user_id: String,
    /// Provider access token carried inside the credential.
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl TryFrom<SessionClaims> for AuthenticatedSession {
    type Error = AuthError;

    fn try_from(claims: SessionClaims) -> Result<Self, Self::Error> {
        let expires_at = claims
            .expires_at()
            .ok_or(taskflow_core::auth::AuthError::InvalidToken)?;

        Ok(Self {
            user_id: claims.user_id,
            access_token: claims.access_token,
            expires_at,
        })
    }
}

/// Validate the `Authorization: Bearer` credential of a request.
fn authenticate(state: &AuthState, headers: &HeaderMap) -> Result<AuthenticatedSession, AuthError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or(taskflow_core::auth::AuthError::InvalidToken)?;

    let claims = state.tokens.validate(token)?;
    AuthenticatedSession::try_from(claims)
}

/// Middleware that rejects requests without a valid session credential.
///
/// Use with `axum::middleware::from_fn_with_state`. On success the
/// [`AuthenticatedSession`] is available to handlers through
/// [`CurrentSession`]. On failure the downstream handler never runs and the
/// response is `401 {"error":"unauthorized"}`.
pub async fn require_session(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let session = authenticate(&state, request.headers()).inspect_err(|_| {
        tracing::debug!(path = %request.uri().path(), "Rejected unauthenticated request");
    })?;

    tracing::debug!(user_id = %session.user_id, "Session accepted");
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Extractor for the session established by [`require_session`].
///
/// Only reads request extensions. Returns 401 if the route is not behind the
/// gate.
pub struct CurrentSession(pub AuthenticatedSession);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedSession>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| taskflow_core::auth::AuthError::InvalidToken.into())
    }
}

/// Extractor for an optional session. Returns None if not authenticated.
pub struct OptionalSession(pub Option<AuthenticatedSession>);

impl<S> FromRequestParts<S> for OptionalSession
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        Ok(OptionalSession(authenticate(&auth_state, &parts.headers).ok()))
    }
}
