//! `AuthZ` resolver module.

use std::sync::Arc;

use authz_resolver_sdk::AuthZResolverClient;
use tracing::info;

use crate::domain::{AuthZResolverLocalClient, PolicyRegistry};

/// `AuthZ` Resolver module.
///
/// Freezes a built [`PolicyRegistry`] behind the [`AuthZResolverClient`]
/// trait. Policy plugins contribute to the builder before this runs.
pub struct AuthZResolver;

impl AuthZResolver {
    #[tracing::instrument(skip_all, fields(policy_count = registry.len()))]
    #[must_use]
    pub fn init(registry: PolicyRegistry) -> Arc<dyn AuthZResolverClient> {
        info!(policies = ?registry.names(), "Initializing authz_resolver");

        Arc::new(AuthZResolverLocalClient::new(Arc::new(registry)))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use authz_resolver_sdk::{EvaluationContext, Policy, PolicyError, PolicyName};
    use resolutions_security::Principal;

    use super::*;

    struct AllowAll;

    impl Policy for AllowAll {
        fn evaluate(&self, _ctx: &EvaluationContext<'_>) -> Result<bool, PolicyError> {
            Ok(true)
        }
    }

    #[test]
    fn init_exposes_registered_policies() {
        let mut builder = PolicyRegistry::builder();
        builder
            .register(PolicyName::new("allow-all"), Arc::new(AllowAll))
            .unwrap();

        let client = AuthZResolver::init(builder.build());
        let principal = Principal::builder().name("alice").build();
        let name = PolicyName::new("allow-all");

        let policy = client.policy(&name).unwrap();
        assert!(
            policy
                .evaluate(&EvaluationContext::new(&principal, &name))
                .unwrap()
        );
        assert!(client.ensure_registered(&[name]).is_ok());
    }
}
