//! Policy registry.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use authz_resolver_sdk::{Policy, PolicyName};

use super::error::DomainError;

/// Collects policies during startup.
#[derive(Default)]
pub struct PolicyRegistryBuilder {
    policies: HashMap<PolicyName, Arc<dyn Policy>>,
}

impl PolicyRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `policy` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicatePolicy`] if `name` is already taken.
    pub fn register(
        &mut self,
        name: PolicyName,
        policy: Arc<dyn Policy>,
    ) -> Result<&mut Self, DomainError> {
        match self.policies.entry(name) {
            Entry::Occupied(e) => Err(DomainError::DuplicatePolicy(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(policy);
                Ok(self)
            }
        }
    }

    /// Register every `(name, policy)` pair.
    ///
    /// # Errors
    ///
    /// Stops at the first duplicate, see [`register`](Self::register).
    pub fn register_all<I>(&mut self, policies: I) -> Result<&mut Self, DomainError>
    where
        I: IntoIterator<Item = (PolicyName, Arc<dyn Policy>)>,
    {
        for (name, policy) in policies {
            self.register(name, policy)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> PolicyRegistry {
        PolicyRegistry {
            policies: self.policies,
        }
    }
}

/// Read-only mapping from policy name to predicate.
pub struct PolicyRegistry {
    policies: HashMap<PolicyName, Arc<dyn Policy>>,
}

impl PolicyRegistry {
    #[must_use]
    pub fn builder() -> PolicyRegistryBuilder {
        PolicyRegistryBuilder::new()
    }

    #[must_use]
    pub fn get(&self, name: &PolicyName) -> Option<Arc<dyn Policy>> {
        self.policies.get(name).cloned()
    }

    /// Fail fast on names a guarded operation references but nobody registered.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnregisteredPolicy`] for the first missing name.
    pub fn ensure_registered(&self, names: &[PolicyName]) -> Result<(), DomainError> {
        match names.iter().find(|name| !self.policies.contains_key(*name)) {
            Some(missing) => Err(DomainError::UnregisteredPolicy(missing.clone())),
            None => Ok(()),
        }
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&PolicyName> {
        let mut names: Vec<&PolicyName> = self.policies.keys().collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl std::fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("policies", &self.names())
            .finish()
    }
}
