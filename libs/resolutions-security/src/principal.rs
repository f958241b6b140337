use std::collections::HashMap;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::authority::AuthoritySet;

/// Arbitrary claims carried over from a bearer token.
pub type PrincipalAttributes = HashMap<String, serde_json::Value>;

/// How the principal proved its identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationMethod {
    /// Username and password checked against the identity store.
    #[default]
    Password,
    /// Bearer token validated upstream; authorities narrowed by its scopes.
    Bearer,
}

/// `Principal` is the resolved, authenticated identity of one request.
///
/// Built by the `AuthN` resolver and passed explicitly to every guarded
/// operation. Immutable once built: there are no setters, and each request
/// gets its own value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Canonical identity name, copied from the stored identity.
    name: String,
    /// Effective authorities after role expansion and token narrowing.
    #[serde(default)]
    authorities: AuthoritySet,
    /// Token claims when authenticated by bearer token, empty otherwise.
    #[serde(default)]
    attributes: PrincipalAttributes,
    #[serde(default)]
    method: AuthenticationMethod,
    /// Original bearer token. Never serialized/persisted.
    /// Wrapped in `SecretString` so `Debug` redacts the value automatically.
    #[serde(skip)]
    bearer_token: Option<SecretString>,
}

impl Principal {
    /// Create a new `Principal` builder
    #[must_use]
    pub fn builder() -> PrincipalBuilder {
        PrincipalBuilder::default()
    }

    /// Get the canonical identity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the effective authorities.
    #[must_use]
    pub fn authorities(&self) -> &AuthoritySet {
        &self.authorities
    }

    /// Whether `authority` is among the effective authorities (exact match).
    #[must_use]
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    /// Get the attribute map (token claims, or empty for password logins).
    #[must_use]
    pub fn attributes(&self) -> &PrincipalAttributes {
        &self.attributes
    }

    /// Get a single attribute by claim name.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    #[must_use]
    pub fn method(&self) -> AuthenticationMethod {
        self.method
    }

    /// Get the original bearer token, if the principal was token-authenticated.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }
}

#[derive(Default)]
pub struct PrincipalBuilder {
    name: Option<String>,
    authorities: AuthoritySet,
    attributes: PrincipalAttributes,
    method: AuthenticationMethod,
    bearer_token: Option<SecretString>,
}

impl PrincipalBuilder {
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn authorities(mut self, authorities: AuthoritySet) -> Self {
        self.authorities = authorities;
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: PrincipalAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn method(mut self, method: AuthenticationMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<SecretString>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Principal {
        Principal {
            name: self.name.unwrap_or_default(),
            authorities: self.authorities,
            attributes: self.attributes,
            method: self.method,
            bearer_token: self.bearer_token,
        }
    }
}
