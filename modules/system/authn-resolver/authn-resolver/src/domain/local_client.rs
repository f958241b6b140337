//! Local (in-process) client for the `AuthN` resolver.

use std::sync::Arc;

use async_trait::async_trait;
use authn_resolver_sdk::{AuthNResolverClient, AuthNResolverError, Credential};
use resolutions_security::Principal;

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed out by [`AuthNResolver::init`](crate::AuthNResolver::init).
pub struct AuthNResolverLocalClient {
    svc: Arc<Service>,
}

impl AuthNResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AuthNResolverError {
    if e.is_rejection() {
        tracing::debug!(operation = op, error = %e, "authentication rejected");
    } else {
        tracing::error!(operation = op, error = ?e, "authn_resolver call failed");
    }
    e.into()
}

#[async_trait]
impl AuthNResolverClient for AuthNResolverLocalClient {
    async fn resolve_principal(
        &self,
        credential: &Credential,
    ) -> Result<Principal, AuthNResolverError> {
        self.svc
            .resolve_principal(credential)
            .await
            .map_err(|e| log_and_convert("resolve_principal", e))
    }
}
