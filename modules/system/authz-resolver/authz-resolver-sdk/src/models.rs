//! Domain models for the `AuthZ` resolver module.

use std::fmt;

use resolutions_security::{OwnedResource, Principal};
use serde::{Deserialize, Serialize};

/// Name under which the built-in ownership policy is registered.
pub const OWNER_OR_ADMIN: &str = "owner-or-admin";

/// Key of a registered policy.
///
/// Guarded operations hold their policy names as values and check them
/// against the registry at startup, so a typo fails wiring instead of
/// silently denying at request time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyName(String);

impl PolicyName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// `owner-or-admin`.
    #[must_use]
    pub fn owner_or_admin() -> Self {
        Self::new(OWNER_OR_ADMIN)
    }

    /// `has-authority(<authority>)`.
    #[must_use]
    pub fn has_authority(authority: &str) -> Self {
        Self(format!("has-authority({authority})"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input of a single policy decision.
///
/// Borrowed from the request that makes the decision and dropped right
/// after it.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    principal: &'a Principal,
    resource: Option<&'a dyn OwnedResource>,
    policy: &'a PolicyName,
}

impl<'a> EvaluationContext<'a> {
    /// Context without a resource, as used before an operation runs.
    #[must_use]
    pub fn new(principal: &'a Principal, policy: &'a PolicyName) -> Self {
        Self {
            principal,
            resource: None,
            policy,
        }
    }

    #[must_use]
    pub fn with_resource(mut self, resource: &'a dyn OwnedResource) -> Self {
        self.resource = Some(resource);
        self
    }

    #[must_use]
    pub fn principal(&self) -> &'a Principal {
        self.principal
    }

    #[must_use]
    pub fn resource(&self) -> Option<&'a dyn OwnedResource> {
        self.resource
    }

    #[must_use]
    pub fn policy(&self) -> &'a PolicyName {
        self.policy
    }
}

impl fmt::Debug for EvaluationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("principal", &self.principal.name())
            .field("resource_owner", &self.resource.map(OwnedResource::owner))
            .field("policy", &self.policy)
            .finish()
    }
}
