//! Local (in-process) client for the `AuthZ` resolver.

use std::sync::Arc;

use authz_resolver_sdk::{AuthZResolverClient, AuthZResolverError, Policy, PolicyName};

use super::{DomainError, PolicyRegistry};

/// Local client wrapping the registry.
pub struct AuthZResolverLocalClient {
    registry: Arc<PolicyRegistry>,
}

impl AuthZResolverLocalClient {
    #[must_use]
    pub fn new(registry: Arc<PolicyRegistry>) -> Self {
        Self { registry }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AuthZResolverError {
    tracing::error!(operation = op, error = %e, "authz_resolver call failed");
    e.into()
}

impl AuthZResolverClient for AuthZResolverLocalClient {
    fn policy(&self, name: &PolicyName) -> Option<Arc<dyn Policy>> {
        self.registry.get(name)
    }

    fn ensure_registered(&self, names: &[PolicyName]) -> Result<(), AuthZResolverError> {
        self.registry
            .ensure_registered(names)
            .map_err(|e| log_and_convert("ensure_registered", e))
    }
}
