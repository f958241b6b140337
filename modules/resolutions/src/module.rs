//! Module wiring: plugins, resolvers, repository and service.

use std::sync::Arc;

use anyhow::Context;
use authn_resolver::AuthNResolver;
use authn_resolver_sdk::AuthNResolverClient;
use authz_resolver::{AuthZResolver, PolicyRegistry};
use authz_resolver_sdk::{AuthZResolverClient, PolicyEnforcer};
use static_authz_plugin::StaticAuthZPlugin;
use static_identity_plugin::{StaticIdentityPlugin, StaticIdentityStore};
use tracing::info;

use crate::api::ResolutionsClient;
use crate::config::ResolutionsConfig;
use crate::domain::{ResolutionsLocalClient, Service, referenced_policies, seed};
use crate::infra::storage::InMemoryResolutionRepository;

/// A fully wired resolutions module.
pub struct Resolutions {
    client: Arc<dyn ResolutionsClient>,
    authz: Arc<dyn AuthZResolverClient>,
    identity_store: Arc<StaticIdentityStore>,
}

impl Resolutions {
    /// Build every component from configuration.
    ///
    /// Fails fast on an invalid role table, an invalid account, an empty
    /// policy authority, or a policy the service needs but nobody registered.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid piece of configuration.
    #[tracing::instrument(skip_all)]
    pub async fn init(cfg: &ResolutionsConfig) -> anyhow::Result<Self> {
        info!("Initializing resolutions module");

        let identity = StaticIdentityPlugin::init(&cfg.identity)
            .context("static identity plugin")?;
        let authn: Arc<dyn AuthNResolverClient> = AuthNResolver::init(
            &cfg.authn,
            identity.identity_store(),
            identity.token_validator(),
            identity.password_verifier(),
        )
        .context("authn resolver")?;

        let policies = StaticAuthZPlugin::init(&cfg.authz).context("static authz plugin")?;
        let mut registry = PolicyRegistry::builder();
        registry
            .register_all(policies.into_policies())
            .context("policy registry")?;
        let authz = AuthZResolver::init(registry.build());
        authz
            .ensure_registered(&referenced_policies())
            .context("policy registry")?;

        let repo = Arc::new(InMemoryResolutionRepository::new());
        if cfg.seed_resolutions {
            seed::seed(repo.as_ref()).await.context("seeding resolutions")?;
        }

        let svc = Arc::new(Service::new(
            repo,
            PolicyEnforcer::new(Arc::clone(&authz)),
            cfg.service_config(),
        ));
        let client: Arc<dyn ResolutionsClient> = Arc::new(ResolutionsLocalClient::new(authn, svc));

        info!("resolutions module initialized");
        Ok(Self {
            client,
            authz,
            identity_store: Arc::clone(&identity.store),
        })
    }

    /// The guarded-operation client.
    #[must_use]
    pub fn client(&self) -> Arc<dyn ResolutionsClient> {
        Arc::clone(&self.client)
    }

    /// The policy registry client, for enforcement outside the service.
    #[must_use]
    pub fn authz(&self) -> Arc<dyn AuthZResolverClient> {
        Arc::clone(&self.authz)
    }

    /// The backing identity store, for account administration.
    #[must_use]
    pub fn identity_store(&self) -> &StaticIdentityStore {
        &self.identity_store
    }
}
