//! In-memory identity store.

use std::collections::HashMap;

use async_trait::async_trait;
use authn_resolver_sdk::{Identity, IdentityStoreClient, IdentityStoreError, InvalidIdentity};
use parking_lot::RwLock;

use crate::config::UserConfig;

/// Identity store holding accounts in memory.
///
/// Lookups always observe the latest committed grant or enable/disable,
/// since both happen under the same lock. The resolver never caches
/// identities, so a revoked account is refused on its next request.
#[derive(Debug, Default)]
pub struct StaticIdentityStore {
    identities: RwLock<HashMap<String, Identity>>,
}

impl StaticIdentityStore {
    /// Load the configured accounts.
    ///
    /// A later entry with the same name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentity`] if an account has an empty name.
    pub fn from_config(users: &[UserConfig]) -> Result<Self, InvalidIdentity> {
        let mut identities = HashMap::with_capacity(users.len());

        for user in users {
            let mut identity = Identity::new(user.name.as_str(), user.password_hash.as_str())?
                .enabled(user.enabled);
            for authority in &user.authorities {
                identity = identity.grant_authority(authority.as_str());
            }
            if let Some(full_name) = &user.full_name {
                identity = identity.full_name(full_name.as_str());
            }
            identities.insert(identity.name().to_owned(), identity);
        }

        Ok(Self {
            identities: RwLock::new(identities),
        })
    }

    /// Add or replace an account.
    pub fn insert(&self, identity: Identity) {
        self.identities
            .write()
            .insert(identity.name().to_owned(), identity);
    }

    /// Grant an authority to an existing account.
    ///
    /// Returns `false` if no account has that name.
    #[must_use]
    pub fn grant_authority(&self, name: &str, authority: &str) -> bool {
        self.update(name, |identity| identity.grant_authority(authority))
    }

    /// Enable or disable an existing account.
    ///
    /// Returns `false` if no account has that name.
    #[must_use]
    pub fn set_enabled(&self, name: &str, enabled: bool) -> bool {
        self.update(name, |identity| identity.enabled(enabled))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.read().is_empty()
    }

    fn update(&self, name: &str, f: impl FnOnce(Identity) -> Identity) -> bool {
        let mut guard = self.identities.write();
        match guard.remove(name) {
            Some(identity) => {
                guard.insert(name.to_owned(), f(identity));
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl IdentityStoreClient for StaticIdentityStore {
    async fn find_by_name(&self, name: &str) -> Result<Identity, IdentityStoreError> {
        self.identities
            .read()
            .get(name)
            .cloned()
            .ok_or(IdentityStoreError::NotFound)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use resolutions_security::constants::{ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE};

    use super::*;
    use crate::config::StaticIdentityPluginConfig;

    fn seeded() -> StaticIdentityStore {
        StaticIdentityStore::from_config(&StaticIdentityPluginConfig::default().users).unwrap()
    }

    #[tokio::test]
    async fn seeded_accounts_are_found() {
        let store = seeded();

        assert_eq!(store.len(), 4);
        let admin = store.find_by_name("admin").await.unwrap();
        assert!(admin.authorities().contains(ADMIN_ROLE));
        assert_eq!(admin.display_name(), Some("Admin Adminson"));
    }

    #[tokio::test]
    async fn unknown_name_is_not_found() {
        let result = seeded().find_by_name("ghost").await;

        assert_eq!(result.unwrap_err(), IdentityStoreError::NotFound);
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let result = seeded().find_by_name("User").await;

        assert_eq!(result.unwrap_err(), IdentityStoreError::NotFound);
    }

    #[tokio::test]
    async fn grants_and_disables_are_visible_to_next_lookup() {
        let store = seeded();

        assert!(store.grant_authority("hasread", RESOLUTION_WRITE));
        assert!(store.set_enabled("haswrite", false));
        assert!(!store.grant_authority("ghost", RESOLUTION_READ));

        let hasread = store.find_by_name("hasread").await.unwrap();
        assert!(hasread.authorities().contains(RESOLUTION_WRITE));
        let haswrite = store.find_by_name("haswrite").await.unwrap();
        assert!(!haswrite.is_enabled());
    }

    #[test]
    fn empty_name_is_rejected() {
        let users = vec![UserConfig {
            name: String::new(),
            password_hash: "{noop}x".to_owned(),
            enabled: true,
            authorities: Vec::new(),
            full_name: None,
        }];

        assert_eq!(
            StaticIdentityStore::from_config(&users).unwrap_err(),
            InvalidIdentity::EmptyName
        );
    }
}
