use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use taskflow_auth::{auth_routes, require_session};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        dashboard::dashboard,
        demo::{list_tasks, list_team},
        health::{api_health, health},
        sync::sync,
    },
    state::AppState,
};

/// CORS for the browser frontend.
///
/// Credentials travel in the `Authorization` header, never in cookies.
fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = match &config.cors_allowed_origins {
        Some(origins) => AllowOrigin::list(origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(%origin, "Ignoring invalid CORS origin"))
                .ok()
        })),
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Routes behind the Auth Gate
    let protected_routes = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/sync", post(sync))
        .route_layer(from_fn_with_state(state.auth.clone(), require_session));

    // API v1 routes
    let api_routes = Router::new()
        .route("/health", get(api_health))
        .route("/tasks", get(list_tasks))
        .route("/team", get(list_team))
        .merge(protected_routes)
        .merge(auth_routes().with_state(state.auth.clone()));

    // Main application router
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout,
        ))
        .with_state(state)
}
