//! Role expansion: coarse roles into fine-grained authorities.

use std::collections::{BTreeMap, HashMap};

use resolutions_security::AuthoritySet;

/// Role table rejected at startup.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RoleExpansionError {
    #[error("role name must not be empty")]
    EmptyRole,

    #[error("role '{role}' implies '{implied}', which is itself a role")]
    NestedRole { role: String, implied: String },
}

/// Maps a raw granted authority to the authorities it stands for.
///
/// Every authority expands to at least itself. A configured role
/// additionally expands to its implied authorities. Because implied
/// authorities can never be roles, expanding an expanded set is a no-op.
#[derive(Debug, Clone, Default)]
pub struct RoleExpander {
    roles: HashMap<String, AuthoritySet>,
}

impl RoleExpander {
    /// Build an expander from a role table.
    ///
    /// # Errors
    ///
    /// - [`RoleExpansionError::EmptyRole`] if a role key is empty
    /// - [`RoleExpansionError::NestedRole`] if an implied authority is another role
    pub fn new(roles: &BTreeMap<String, Vec<String>>) -> Result<Self, RoleExpansionError> {
        let mut table = HashMap::with_capacity(roles.len());

        for (role, implied) in roles {
            if role.is_empty() {
                return Err(RoleExpansionError::EmptyRole);
            }
            if let Some(nested) = implied.iter().find(|a| roles.contains_key(*a)) {
                return Err(RoleExpansionError::NestedRole {
                    role: role.clone(),
                    implied: nested.clone(),
                });
            }
            table.insert(role.clone(), implied.iter().cloned().collect());
        }

        Ok(Self { roles: table })
    }

    /// Expand a single raw authority.
    #[must_use]
    pub fn expand(&self, raw_authority: &str) -> AuthoritySet {
        let mut expanded = AuthoritySet::new();
        expanded.insert(raw_authority.to_owned());
        if let Some(implied) = self.roles.get(raw_authority) {
            expanded.extend(implied.iter().cloned());
        }
        expanded
    }

    /// Expand every authority of a set and union the results.
    #[must_use]
    pub fn expand_all<'a, I>(&self, raw_authorities: I) -> AuthoritySet
    where
        I: IntoIterator<Item = &'a String>,
    {
        raw_authorities
            .into_iter()
            .flat_map(|a| self.expand(a))
            .collect()
    }
}
