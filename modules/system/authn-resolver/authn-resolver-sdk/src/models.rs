//! Domain models for the `AuthN` resolver module.

use resolutions_security::{AuthoritySet, PrincipalAttributes};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::InvalidIdentity;

/// A stored account as returned by the identity store.
///
/// The resolver only reads identities; granting authorities and toggling
/// `enabled` belong to the store's own administration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    password_hash: String,
    enabled: bool,
    authorities: AuthoritySet,
    full_name: Option<String>,
}

impl Identity {
    /// Create an enabled identity with no authorities.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentity::EmptyName`] if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, InvalidIdentity> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidIdentity::EmptyName);
        }
        Ok(Self {
            name,
            password_hash: password_hash.into(),
            enabled: true,
            authorities: AuthoritySet::new(),
            full_name: None,
        })
    }

    /// Add an authority to this identity's grants.
    #[must_use]
    pub fn grant_authority(mut self, authority: impl Into<String>) -> Self {
        self.authorities.insert(authority.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque credential hash, e.g. `{sha256}<hex>`.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Raw granted authorities, before role expansion.
    #[must_use]
    pub fn authorities(&self) -> &AuthoritySet {
        &self.authorities
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}

/// Claims of an already-validated bearer token.
///
/// Owned by the request carrying the token; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject; must name a stored identity for resolution to succeed.
    pub subject: String,
    /// Authorities asserted by the issuer on the end user's behalf.
    #[serde(default)]
    pub scopes: AuthoritySet,
    /// Every other claim, passed through to the principal untouched.
    #[serde(default)]
    pub attributes: PrincipalAttributes,
}

/// An inbound credential.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Username and password (HTTP Basic and similar).
    Password {
        username: String,
        password: SecretString,
    },
    /// Raw bearer token, without the `Bearer ` prefix.
    Bearer(SecretString),
}

impl Credential {
    #[must_use]
    pub fn password(username: &str, password: &str) -> Self {
        Self::Password {
            username: username.to_owned(),
            password: SecretString::from(password.to_owned()),
        }
    }

    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self::Bearer(SecretString::from(token.to_owned()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn identity_rejects_empty_name() {
        assert_eq!(Identity::new("", "{noop}x"), Err(InvalidIdentity::EmptyName));
    }

    #[test]
    fn identity_grants_are_a_set() {
        let identity = Identity::new("user", "{noop}password")
            .unwrap()
            .grant_authority("resolution:read")
            .grant_authority("resolution:read")
            .full_name("User Userson");

        assert_eq!(identity.name(), "user");
        assert!(identity.is_enabled());
        assert_eq!(identity.authorities().len(), 1);
        assert_eq!(identity.display_name(), Some("User Userson"));
    }

    #[test]
    fn credential_debug_redacts_secrets() {
        let password = Credential::password("user", "hunter2");
        let bearer = Credential::bearer("opaque-token");

        assert!(!format!("{password:?}").contains("hunter2"));
        assert!(!format!("{bearer:?}").contains("opaque-token"));
    }

    #[test]
    fn token_claims_deserialize_with_defaults() {
        let claims: TokenClaims = serde_json::from_str(r#"{"subject":"alice"}"#).unwrap();

        assert_eq!(claims.subject, "alice");
        assert!(claims.scopes.is_empty());
        assert!(claims.attributes.is_empty());
    }
}
