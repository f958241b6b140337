//! Layered configuration for the resolutions module.
//!
//! Sources, later ones winning:
//!
//! 1. built-in defaults (seed accounts, `ROLE_ADMIN` role table, policies)
//! 2. an optional YAML file
//! 3. `RESOLUTIONS_`-prefixed environment variables, `__` separating levels
//!    (e.g. `RESOLUTIONS_AUTHN__STORE_TIMEOUT=250ms`)

use std::path::Path;

use authn_resolver::AuthNResolverConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use static_authz_plugin::config::StaticAuthZPluginConfig;
use static_identity_plugin::config::StaticIdentityPluginConfig;

use crate::domain::service::ServiceConfig;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RESOLUTIONS_";

/// Configuration for the resolutions module.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolutionsConfig {
    /// Role table and identity store timeout.
    pub authn: AuthNResolverConfig,

    /// Accounts and static bearer tokens.
    pub identity: StaticIdentityPluginConfig,

    /// Built-in policy configuration.
    pub authz: StaticAuthZPluginConfig,

    /// Insert the sample resolutions into an empty repository on init.
    pub seed_resolutions: bool,

    /// Maximum resolution text length, in characters.
    pub max_text_length: usize,
}

impl Default for ResolutionsConfig {
    fn default() -> Self {
        Self {
            authn: AuthNResolverConfig::default(),
            identity: StaticIdentityPluginConfig::default(),
            authz: StaticAuthZPluginConfig::default(),
            seed_resolutions: true,
            max_text_length: ServiceConfig::default().max_text_length,
        }
    }
}

impl ResolutionsConfig {
    /// Figment with the YAML file (if any) and environment providers merged.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load the configuration.
    ///
    /// Fields absent from every source keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed, a value
    /// has the wrong shape, or an unknown key is present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path
            && !path.is_file()
        {
            anyhow::bail!("config file not found: {}", path.display());
        }
        let cfg: Self = Self::figment(path).extract()?;
        tracing::debug!(
            users = cfg.identity.users.len(),
            tokens = cfg.identity.tokens.len(),
            roles = cfg.authn.roles.len(),
            "configuration loaded"
        );
        Ok(cfg)
    }

    pub(crate) fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_text_length: self.max_text_length,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;

    // Env-touching tests go through temp_env, which serializes them.
    const TIMEOUT_VAR: &str = "RESOLUTIONS_AUTHN__STORE_TIMEOUT";

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_any_source() {
        temp_env::with_var_unset(TIMEOUT_VAR, || {
            let cfg = ResolutionsConfig::load(None).unwrap();

            assert_eq!(cfg.identity.users.len(), 4);
            assert_eq!(cfg.authn.store_timeout, Duration::from_secs(5));
            assert!(cfg.seed_resolutions);
        });
    }

    #[test]
    fn yaml_overrides_nested_fields_only() {
        let file = yaml_file(
            r#"
authn:
  store_timeout: "750ms"
identity:
  scope_prefix: "SCOPE_"
seed_resolutions: false
"#,
        );

        let cfg = temp_env::with_var_unset(TIMEOUT_VAR, || {
            ResolutionsConfig::load(Some(file.path())).unwrap()
        });

        assert_eq!(cfg.authn.store_timeout, Duration::from_millis(750));
        assert!(cfg.authn.roles.contains_key("ROLE_ADMIN"));
        assert_eq!(cfg.identity.scope_prefix.as_deref(), Some("SCOPE_"));
        assert_eq!(cfg.identity.users.len(), 4);
        assert!(!cfg.seed_resolutions);
    }

    #[test]
    fn environment_wins_over_file() {
        let file = yaml_file("authn:\n  store_timeout: \"2s\"\n");

        temp_env::with_var(TIMEOUT_VAR, Some("250ms"), || {
            let cfg = ResolutionsConfig::load(Some(file.path())).unwrap();
            assert_eq!(cfg.authn.store_timeout, Duration::from_millis(250));
        });
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = yaml_file("authn:\n  store_timeuot: \"2s\"\n");

        temp_env::with_var_unset(TIMEOUT_VAR, || {
            assert!(ResolutionsConfig::load(Some(file.path())).is_err());
        });
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("resolutons.yaml");

        let err = temp_env::with_var_unset(TIMEOUT_VAR, || {
            ResolutionsConfig::load(Some(&missing)).unwrap_err()
        });

        assert!(err.to_string().contains("config file not found"));
        assert!(ResolutionsConfig::figment(Some(&missing)).extract::<ResolutionsConfig>().is_err());
    }

    #[test]
    fn bad_duration_is_rejected() {
        let file = yaml_file("authn:\n  store_timeout: \"soon\"\n");

        temp_env::with_var_unset(TIMEOUT_VAR, || {
            assert!(ResolutionsConfig::load(Some(file.path())).is_err());
        });
    }
}
