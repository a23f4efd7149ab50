//! Storage for OAuth authorization attempts.
//!
//! Provides `AuthorizationStore` implementations for:
//! - In-memory (single instance)

mod inmemory;

pub use inmemory::InMemoryAuthorizationStore;
