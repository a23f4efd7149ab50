mod error;
mod functions;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{
    bearer_token, calculate_expiry, generate_state, is_authorization_expired, is_claims_expired,
    STATE_BYTES,
};
pub use traits::{AuthorizationStore, ProviderClient, Result};
pub use types::{PendingAuthorization, Provider, ProviderIdentity, SessionClaims, TokenGrant};
