//! Configuration for the static `AuthZ` resolver plugin.

use resolutions_security::constants::{ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE};
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthZPluginConfig {
    /// Authority that passes `owner-or-admin` regardless of ownership.
    pub admin_authority: String,

    /// Authorities for which a `has-authority(X)` policy is registered.
    pub authorities: Vec<String>,
}

impl Default for StaticAuthZPluginConfig {
    fn default() -> Self {
        Self {
            admin_authority: ADMIN_ROLE.to_owned(),
            authorities: vec![RESOLUTION_READ.to_owned(), RESOLUTION_WRITE.to_owned()],
        }
    }
}
