//! Test fixtures: a fake ClickUp API served on the loopback interface.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use tokio::net::TcpListener;
use url::Url;

use crate::config::{AuthConfig, ProviderConfig};

pub const FAKE_CODE: &str = "abc123";
pub const FAKE_ACCESS_TOKEN: &str = "tok1";
pub const TEST_SECRET: &str = "test-secret-that-is-at-least-32-bytes!";

/// Start a fake ClickUp API and return its `/api/v2` base URL.
///
/// - `POST /api/v2/oauth/token` accepts `code=abc123` for client `client-123`
/// - `GET /api/v2/user` and `GET /api/v2/team` accept `Bearer tok1`
///
/// Magic codes and tokens trigger the failure modes exercised by tests.
pub async fn spawn_fake_clickup() -> String {
    let app = Router::new()
        .route("/api/v2/oauth/token", post(token))
        .route("/api/v2/user", get(user))
        .route("/api/v2/team", get(teams));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/v2")
}

async fn token(Form(form): Form<HashMap<String, String>>) -> Response {
    let client_ok = form.get("client_id").map(String::as_str) == Some("client-123")
        && form.get("client_secret").map(String::as_str) == Some("shh");
    if !client_ok {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "err": "Client not found", "ECODE": "OAUTH_010" })),
        )
            .into_response();
    }

    match form.get("code").map(String::as_str) {
        Some(FAKE_CODE) => Json(serde_json::json!({
            "access_token": FAKE_ACCESS_TOKEN,
            "token_type": "Bearer",
        }))
        .into_response(),
        Some("garbage-body") => (StatusCode::OK, "<html>oops</html>").into_response(),
        Some("empty-token") => Json(serde_json::json!({ "access_token": "" })).into_response(),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "err": "Code already used", "ECODE": "OAUTH_014" })),
        )
            .into_response(),
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn user(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(FAKE_ACCESS_TOKEN) => Json(serde_json::json!({
            "user": {
                "id": 42,
                "username": "somchai",
                "email": "somchai@example.com",
                "color": "#7b68ee",
            }
        }))
        .into_response(),
        Some("malformed-json") => (StatusCode::OK, r#"{"user": {"id": "#).into_response(),
        Some("slow-token") => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK.into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "err": "Token invalid", "ECODE": "OAUTH_025" })),
        )
            .into_response(),
    }
}

async fn teams(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(FAKE_ACCESS_TOKEN) => Json(serde_json::json!({
            "teams": [{
                "id": "9012345",
                "name": "TaskFlow Workspace",
                "color": "#536cfe",
                "members": [
                    { "user": { "id": 42, "username": "somchai", "email": "somchai@example.com" } }
                ]
            }]
        }))
        .into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "err": "Token invalid", "ECODE": "OAUTH_025" })),
        )
            .into_response(),
    }
}

pub fn provider_config(api_base_url: &str) -> ProviderConfig {
    ProviderConfig {
        client_id: "client-123".to_string(),
        client_secret: "shh".to_string(),
        redirect_uri: Url::parse("http://localhost:3000/api/v1/auth/clickup/callback").unwrap(),
        authorize_url: Url::parse("https://app.clickup.com/api").unwrap(),
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(5),
    }
}

pub fn auth_config(api_base_url: &str) -> AuthConfig {
    AuthConfig {
        clickup: provider_config(api_base_url),
        jwt_secret: TEST_SECRET.to_string(),
        session_ttl: Duration::from_secs(24 * 60 * 60),
        state_ttl: Duration::from_secs(600),
        frontend_url: Url::parse("http://192.168.20.10:555").unwrap(),
    }
}
