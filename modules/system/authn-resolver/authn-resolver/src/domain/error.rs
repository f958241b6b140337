//! Domain errors for the `AuthN` resolver.

use authn_resolver_sdk::AuthNResolverError;

/// Internal domain errors.
///
/// Richer than [`AuthNResolverError`]: the variants that fold into
/// `Unauthorized` stay distinguishable here for logging.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("no identity named '{name}'")]
    IdentityNotFound { name: String },

    #[error("identity '{name}' is disabled")]
    IdentityDisabled { name: String },

    #[error("bad credentials for '{name}'")]
    BadCredentials { name: String },

    #[error("bearer token rejected: {0}")]
    TokenRejected(String),

    #[error("principal requested without a resolved identity")]
    MissingIdentity,

    #[error("identity store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Whether the error is a plain authentication rejection rather than an infrastructure failure.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::IdentityNotFound { .. }
                | Self::IdentityDisabled { .. }
                | Self::BadCredentials { .. }
                | Self::TokenRejected(_)
        )
    }
}

impl From<DomainError> for AuthNResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::IdentityNotFound { .. }
            | DomainError::IdentityDisabled { .. }
            | DomainError::BadCredentials { .. }
            | DomainError::TokenRejected(_) => Self::Unauthorized,
            DomainError::StoreUnavailable(reason) => Self::StoreUnavailable(reason),
            e @ DomainError::MissingIdentity => Self::Internal(e.to_string()),
            DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}
