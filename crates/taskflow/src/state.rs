//! Shared application state.

use std::sync::Arc;

use taskflow_auth::AuthState;

use crate::config::Config;

/// State passed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(auth: AuthState, config: Config) -> Self {
        Self {
            auth,
            config: Arc::new(config),
        }
    }
}

/// Lets auth extractors pull `AuthState` out of `AppState`.
impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}
