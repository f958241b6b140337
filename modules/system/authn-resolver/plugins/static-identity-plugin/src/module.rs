//! Static identity plugin module.

use std::sync::Arc;

use authn_resolver_sdk::{IdentityStoreClient, PasswordVerifier, TokenValidatorClient};
use tracing::info;

use crate::config::StaticIdentityPluginConfig;
use crate::domain::{DelegatingPasswordVerifier, StaticIdentityStore, StaticTokenValidator};

/// Static identity plugin module.
///
/// Holds the concrete collaborators so administrative code can keep a typed
/// handle on the store while the resolver sees only the SDK traits.
pub struct StaticIdentityPlugin {
    pub store: Arc<StaticIdentityStore>,
    pub validator: Arc<StaticTokenValidator>,
    pub verifier: Arc<DelegatingPasswordVerifier>,
}

impl StaticIdentityPlugin {
    /// Build the plugin from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured account is invalid.
    pub fn init(cfg: &StaticIdentityPluginConfig) -> anyhow::Result<Self> {
        info!("Initializing static_identity_plugin");

        if cfg
            .users
            .iter()
            .any(|u| u.password_hash.starts_with("{noop}"))
        {
            tracing::warn!(
                "Static identity plugin has accounts with `{{noop}}` password hashes; \
                 plain-text passwords must not be used in production."
            );
        }

        let store = Arc::new(StaticIdentityStore::from_config(&cfg.users)?);
        let validator = Arc::new(StaticTokenValidator::new(
            &cfg.tokens,
            cfg.scope_prefix.clone(),
        ));

        info!(
            user_count = store.len(),
            token_count = cfg.tokens.len(),
            scope_prefix = cfg.scope_prefix.as_deref().unwrap_or_default(),
            "Loaded plugin configuration"
        );

        Ok(Self {
            store,
            validator,
            verifier: Arc::new(DelegatingPasswordVerifier),
        })
    }

    #[must_use]
    pub fn identity_store(&self) -> Arc<dyn IdentityStoreClient> {
        self.store.clone()
    }

    #[must_use]
    pub fn token_validator(&self) -> Arc<dyn TokenValidatorClient> {
        self.validator.clone()
    }

    #[must_use]
    pub fn password_verifier(&self) -> Arc<dyn PasswordVerifier> {
        self.verifier.clone()
    }
}
