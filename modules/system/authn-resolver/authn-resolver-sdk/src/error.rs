//! Error types for the `AuthN` resolver module.

use thiserror::Error;

/// Errors that can occur when using the `AuthN` resolver API.
#[derive(Debug, Error)]
pub enum AuthNResolverError {
    /// The credential could not be resolved to an enabled identity.
    ///
    /// Deliberately carries no detail.
    #[error("unauthorized")]
    Unauthorized,

    /// The identity store is unreachable or timed out.
    #[error("identity store unavailable: {0}")]
    StoreUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors returned by an [`IdentityStoreClient`](crate::IdentityStoreClient).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityStoreError {
    /// No identity with the requested name exists.
    #[error("identity not found")]
    NotFound,

    /// The store could not answer (connectivity, timeout, ...).
    #[error("identity store unavailable: {0}")]
    Unavailable(String),
}

/// Returned by a [`TokenValidatorClient`](crate::TokenValidatorClient) when a
/// bearer token fails signature, issuer, or expiry checks.
#[derive(Debug, Clone, Error)]
#[error("token rejected: {0}")]
pub struct TokenValidationError(pub String);

/// Identity record failed its construction invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidIdentity {
    #[error("identity name must not be empty")]
    EmptyName,
}
