//! Configuration for the static identity plugin.

use authn_resolver_sdk::TokenClaims;
use resolutions_security::constants::{ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE};
use serde::Deserialize;

/// `{sha256}` encoding of the seed password `password`.
const SEED_PASSWORD_HASH: &str =
    "{sha256}5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticIdentityPluginConfig {
    /// Accounts loaded into the identity store at startup.
    pub users: Vec<UserConfig>,

    /// Static bearer tokens and the claims they validate to.
    pub tokens: Vec<TokenMapping>,

    /// Prefix stripped from asserted scopes during claims extraction
    /// (e.g. `SCOPE_`). Scopes without the prefix pass through unchanged.
    pub scope_prefix: Option<String>,
}

impl Default for StaticIdentityPluginConfig {
    fn default() -> Self {
        Self {
            users: vec![
                UserConfig::seed("user", &[RESOLUTION_READ], "User Userson"),
                UserConfig::seed("hasread", &[RESOLUTION_READ], "Has Read"),
                UserConfig::seed("haswrite", &[RESOLUTION_WRITE], "Has Write"),
                UserConfig::seed("admin", &[ADMIN_ROLE], "Admin Adminson"),
            ],
            tokens: Vec::new(),
            scope_prefix: None,
        }
    }
}

/// A stored account.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub name: String,

    /// Prefixed hash, `{noop}<plain>` or `{sha256}<hex>`.
    pub password_hash: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Raw granted authorities, roles included.
    #[serde(default)]
    pub authorities: Vec<String>,

    #[serde(default)]
    pub full_name: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl UserConfig {
    fn seed(name: &str, authorities: &[&str], full_name: &str) -> Self {
        Self {
            name: name.to_owned(),
            password_hash: SEED_PASSWORD_HASH.to_owned(),
            enabled: true,
            authorities: authorities.iter().map(|a| (*a).to_owned()).collect(),
            full_name: Some(full_name.to_owned()),
        }
    }
}

/// Maps a static bearer token to the claims it validates to.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    /// The bearer token value to match.
    pub token: String,
    /// Claims returned when this token is presented.
    pub claims: TokenClaims,
}
