//! OAuth provider implementations.
//!
//! This module contains implementations of `ProviderClient` for:
//! - ClickUp
//! - A scripted mock (tests and the `mock` feature)

mod clickup;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use clickup::ClickUpProvider;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockProvider;
