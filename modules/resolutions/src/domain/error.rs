use authn_resolver_sdk::AuthNResolverError;
use authz_resolver_sdk::EnforcerError;
use thiserror::Error;

use crate::errors::ResolutionsError;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resolution not found")]
    NotFound,

    #[error("Access denied by policy '{policy}'")]
    Forbidden { policy: String },

    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Authentication failed")]
    Unauthenticated,

    #[error("Dependency unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Expected outcomes of a request, as opposed to failures of the system.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::Forbidden { .. }
                | Self::Validation { .. }
                | Self::Unauthenticated
        )
    }
}

impl From<EnforcerError> for DomainError {
    fn from(e: EnforcerError) -> Self {
        match e {
            EnforcerError::Denied { policy } => Self::Forbidden {
                policy: policy.to_string(),
            },
        }
    }
}

impl From<AuthNResolverError> for DomainError {
    fn from(e: AuthNResolverError) -> Self {
        match e {
            AuthNResolverError::Unauthorized => Self::Unauthenticated,
            AuthNResolverError::StoreUnavailable(msg) => Self::Unavailable(msg),
            AuthNResolverError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for ResolutionsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => Self::NotFound,
            DomainError::Forbidden { .. } => Self::Forbidden,
            DomainError::Validation { field, message } => Self::Validation { field, message },
            DomainError::Unauthenticated => Self::Unauthenticated,
            DomainError::Unavailable(_) => Self::Unavailable,
            DomainError::Repository(_) | DomainError::Internal(_) => Self::Internal,
        }
    }
}
