//! Core for the TaskFlow backend.
//!
//! Pure types and functions shared by the auth crate and the server. Nothing
//! in here performs I/O.

#[cfg(feature = "auth")]
pub mod auth;
pub mod serde;
pub mod workspace;
