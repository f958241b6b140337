//! Public API trait for the `AuthZ` resolver.

use std::sync::Arc;

use crate::error::AuthZResolverError;
use crate::models::PolicyName;
use crate::plugin_api::Policy;

/// Public API trait for the `AuthZ` resolver (the policy registry).
///
/// Consumed by the [`PolicyEnforcer`](crate::PolicyEnforcer):
///
/// ```ignore
/// let enforcer = PolicyEnforcer::new(authz.clone());
///
/// authz.ensure_registered(&[PolicyName::owner_or_admin()])?;
/// ```
///
/// Lookups are synchronous: the registry is immutable after startup.
pub trait AuthZResolverClient: Send + Sync {
    /// Look up the predicate registered under `name`.
    fn policy(&self, name: &PolicyName) -> Option<Arc<dyn Policy>>;

    /// Check at startup that every referenced policy is registered.
    ///
    /// # Errors
    ///
    /// Returns [`AuthZResolverError::UnknownPolicy`] naming the first
    /// policy that is missing.
    fn ensure_registered(&self, names: &[PolicyName]) -> Result<(), AuthZResolverError>;
}
