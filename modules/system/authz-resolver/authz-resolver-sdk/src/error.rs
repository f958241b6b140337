//! Error types for the `AuthZ` resolver module.

use thiserror::Error;

use crate::models::PolicyName;

/// Errors that can occur when using the `AuthZ` resolver API.
///
/// Only wiring problems surface here. A denial is a `false` decision,
/// never an error.
#[derive(Debug, Error)]
pub enum AuthZResolverError {
    /// A guarded operation references a policy nobody registered.
    #[error("policy '{0}' is not registered")]
    UnknownPolicy(PolicyName),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Raised by a [`Policy`](crate::Policy) that cannot reach a decision.
///
/// The enforcer always folds this into a deny.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The policy needs a resource but was evaluated without one.
    #[error("policy requires a resource")]
    MissingResource,

    /// Any other evaluation failure.
    #[error("policy evaluation failed: {0}")]
    Failed(String),
}
