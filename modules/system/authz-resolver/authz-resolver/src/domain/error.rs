//! Domain errors for the `AuthZ` resolver.

use authz_resolver_sdk::{AuthZResolverError, PolicyName};

/// Internal domain errors.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("policy '{0}' registered twice")]
    DuplicatePolicy(PolicyName),

    #[error("policy '{0}' is not registered")]
    UnregisteredPolicy(PolicyName),
}

impl From<DomainError> for AuthZResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnregisteredPolicy(name) => Self::UnknownPolicy(name),
            e @ DomainError::DuplicatePolicy(_) => Self::Internal(e.to_string()),
        }
    }
}
