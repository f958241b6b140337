//! Static `AuthZ` resolver plugin module.

use std::sync::Arc;

use authz_resolver_sdk::{Policy, PolicyName};
use tracing::info;

use crate::config::StaticAuthZPluginConfig;
use crate::domain::{HasAuthority, OwnerOrAdmin};

/// Static `AuthZ` resolver plugin module.
///
/// Builds the built-in policies from configuration. The caller hands them
/// to the registry builder; this crate never sees the registry itself.
pub struct StaticAuthZPlugin {
    policies: Vec<(PolicyName, Arc<dyn Policy>)>,
}

impl StaticAuthZPlugin {
    /// Build the policies.
    ///
    /// # Errors
    ///
    /// Returns an error if the admin authority or a listed authority is empty.
    pub fn init(cfg: &StaticAuthZPluginConfig) -> anyhow::Result<Self> {
        info!("Initializing static_authz_plugin");

        if cfg.admin_authority.is_empty() {
            anyhow::bail!("admin_authority must not be empty");
        }
        if cfg.authorities.iter().any(String::is_empty) {
            anyhow::bail!("has-authority policies need a non-empty authority");
        }

        let owner_or_admin: Arc<dyn Policy> =
            Arc::new(OwnerOrAdmin::new(cfg.admin_authority.as_str()));
        let mut policies = vec![(PolicyName::owner_or_admin(), owner_or_admin)];
        for authority in &cfg.authorities {
            let has_authority: Arc<dyn Policy> = Arc::new(HasAuthority::new(authority.as_str()));
            policies.push((PolicyName::has_authority(authority), has_authority));
        }

        info!(
            admin_authority = %cfg.admin_authority,
            policy_count = policies.len(),
            "Built static policies"
        );

        Ok(Self { policies })
    }

    /// Names of the policies this plugin provides.
    pub fn names(&self) -> impl Iterator<Item = &PolicyName> {
        self.policies.iter().map(|(name, _)| name)
    }

    #[must_use]
    pub fn into_policies(self) -> Vec<(PolicyName, Arc<dyn Policy>)> {
        self.policies
    }
}
