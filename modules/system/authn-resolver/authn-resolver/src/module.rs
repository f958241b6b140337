//! `AuthN` resolver module.

use std::sync::Arc;

use authn_resolver_sdk::{
    AuthNResolverClient, IdentityStoreClient, PasswordVerifier, TokenValidatorClient,
};
use tracing::info;

use crate::config::AuthNResolverConfig;
use crate::domain::{AuthNResolverLocalClient, RoleExpander, Service};

/// `AuthN` Resolver module.
///
/// Wires the identity store, token validator and password verifier supplied
/// by plugins into a single [`AuthNResolverClient`]. The role table is
/// validated here, so a bad configuration fails at startup rather than on the
/// first request.
pub struct AuthNResolver;

impl AuthNResolver {
    /// Build the resolver client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured role table is invalid.
    #[tracing::instrument(skip_all, fields(roles = cfg.roles.len()))]
    pub fn init(
        cfg: &AuthNResolverConfig,
        store: Arc<dyn IdentityStoreClient>,
        validator: Arc<dyn TokenValidatorClient>,
        verifier: Arc<dyn PasswordVerifier>,
    ) -> anyhow::Result<Arc<dyn AuthNResolverClient>> {
        let expander = RoleExpander::new(&cfg.roles)?;
        info!(
            store_timeout = %humantime::format_duration(cfg.store_timeout),
            "Initializing authn_resolver"
        );

        let svc = Arc::new(Service::new(
            store,
            validator,
            verifier,
            expander,
            cfg.store_timeout,
        ));

        let api: Arc<dyn AuthNResolverClient> = Arc::new(AuthNResolverLocalClient::new(svc));
        Ok(api)
    }
}
