//! Configuration for the `AuthN` resolver.

use std::collections::BTreeMap;
use std::time::Duration;

use resolutions_security::constants::{ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE};
use serde::{Deserialize, Deserializer};

fn default_store_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthNResolverConfig {
    /// Role authority -> fine-grained authorities it implies.
    ///
    /// Implied authorities must not themselves be roles; expansion is one level deep.
    pub roles: BTreeMap<String, Vec<String>>,

    /// Upper bound on a single identity store lookup (e.g. `"5s"`, `"250ms"`).
    #[serde(deserialize_with = "deserialize_duration")]
    pub store_timeout: Duration,
}

impl Default for AuthNResolverConfig {
    fn default() -> Self {
        Self {
            roles: BTreeMap::from([(
                ADMIN_ROLE.to_owned(),
                vec![RESOLUTION_READ.to_owned(), RESOLUTION_WRITE.to_owned()],
            )]),
            store_timeout: default_store_timeout(),
        }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}
