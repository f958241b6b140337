//! Domain service for the `AuthN` resolver.

use std::sync::Arc;
use std::time::Duration;

use authn_resolver_sdk::{
    Credential, Identity, IdentityStoreClient, IdentityStoreError, PasswordVerifier,
    TokenValidatorClient,
};
use resolutions_security::Principal;
use secrecy::SecretString;

use super::error::DomainError;
use super::expander::RoleExpander;
use super::principal_builder::{ValidatedToken, build_principal};
use super::reconciler::reconcile;

/// Hash checked when the username is unknown, so that path costs the same
/// as a wrong password.
const DUMMY_PASSWORD_HASH: &str =
    "{sha256}0000000000000000000000000000000000000000000000000000000000000000";

/// `AuthN` resolver service.
///
/// Holds no per-request state; every call builds its own principal.
pub struct Service {
    store: Arc<dyn IdentityStoreClient>,
    validator: Arc<dyn TokenValidatorClient>,
    verifier: Arc<dyn PasswordVerifier>,
    expander: RoleExpander,
    store_timeout: Duration,
}

impl Service {
    #[must_use]
    pub fn new(
        store: Arc<dyn IdentityStoreClient>,
        validator: Arc<dyn TokenValidatorClient>,
        verifier: Arc<dyn PasswordVerifier>,
        expander: RoleExpander,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            validator,
            verifier,
            expander,
            store_timeout,
        }
    }

    /// Resolve a credential into a principal with reconciled authorities.
    ///
    /// # Errors
    ///
    /// - Rejections (`IdentityNotFound`, `IdentityDisabled`, `BadCredentials`,
    ///   `TokenRejected`) when the credential does not resolve to an enabled identity
    /// - `StoreUnavailable` if the identity store fails or exceeds `store_timeout`
    #[tracing::instrument(skip_all)]
    pub async fn resolve_principal(
        &self,
        credential: &Credential,
    ) -> Result<Principal, DomainError> {
        match credential {
            Credential::Password { username, password } => {
                self.resolve_password(username, password).await
            }
            Credential::Bearer(token) => self.resolve_bearer(token).await,
        }
    }

    async fn resolve_password(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Principal, DomainError> {
        let identity = match self.lookup(username).await {
            Ok(identity) => identity,
            Err(e @ DomainError::IdentityNotFound { .. }) => {
                let _ = self.verifier.verify(password, DUMMY_PASSWORD_HASH);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        if !self.verifier.verify(password, identity.password_hash()) {
            return Err(DomainError::BadCredentials {
                name: identity.name().to_owned(),
            });
        }
        ensure_enabled(&identity)?;

        let expanded = self.expander.expand_all(identity.authorities());
        let effective = reconcile(&expanded, None);

        build_principal(Some(&identity), effective, None)
    }

    async fn resolve_bearer(&self, raw: &SecretString) -> Result<Principal, DomainError> {
        let claims = self
            .validator
            .validate(raw)
            .await
            .map_err(|e| DomainError::TokenRejected(e.0))?;

        let identity = self.lookup(&claims.subject).await?;
        ensure_enabled(&identity)?;

        let expanded = self.expander.expand_all(identity.authorities());
        let effective = reconcile(&expanded, Some(&claims.scopes));

        let token = ValidatedToken {
            claims,
            raw: raw.clone(),
        };
        build_principal(Some(&identity), effective, Some(token))
    }

    /// Fetch an identity, bounded by `store_timeout`.
    ///
    /// Dropping the returned future drops the in-flight store call with it.
    async fn lookup(&self, name: &str) -> Result<Identity, DomainError> {
        let fetched = tokio::time::timeout(self.store_timeout, self.store.find_by_name(name))
            .await
            .map_err(|_| {
                DomainError::StoreUnavailable(format!(
                    "lookup timed out after {}ms",
                    self.store_timeout.as_millis()
                ))
            })?;

        match fetched {
            Ok(identity) => Ok(identity),
            Err(IdentityStoreError::NotFound) => Err(DomainError::IdentityNotFound {
                name: name.to_owned(),
            }),
            Err(IdentityStoreError::Unavailable(reason)) => {
                Err(DomainError::StoreUnavailable(reason))
            }
        }
    }
}

fn ensure_enabled(identity: &Identity) -> Result<(), DomainError> {
    if identity.is_enabled() {
        Ok(())
    } else {
        Err(DomainError::IdentityDisabled {
            name: identity.name().to_owned(),
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use authn_resolver_sdk::{TokenClaims, TokenValidationError};
    use resolutions_security::constants::{ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE};
    use resolutions_security::{AuthenticationMethod, authority_set};
    use secrecy::ExposeSecret;

    use super::*;
    use crate::config::AuthNResolverConfig;

    struct MockStore {
        identities: HashMap<String, Identity>,
    }

    #[async_trait]
    impl IdentityStoreClient for MockStore {
        async fn find_by_name(&self, name: &str) -> Result<Identity, IdentityStoreError> {
            self.identities
                .get(name)
                .cloned()
                .ok_or(IdentityStoreError::NotFound)
        }
    }

    struct SlowStore;

    #[async_trait]
    impl IdentityStoreClient for SlowStore {
        async fn find_by_name(&self, _name: &str) -> Result<Identity, IdentityStoreError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Identity::new("late", "{noop}password").map_err(|_| IdentityStoreError::NotFound)
        }
    }

    struct DownStore;

    #[async_trait]
    impl IdentityStoreClient for DownStore {
        async fn find_by_name(&self, _name: &str) -> Result<Identity, IdentityStoreError> {
            Err(IdentityStoreError::Unavailable("connection refused".to_owned()))
        }
    }

    struct MockValidator {
        tokens: HashMap<String, TokenClaims>,
    }

    #[async_trait]
    impl TokenValidatorClient for MockValidator {
        async fn validate(
            &self,
            bearer_token: &SecretString,
        ) -> Result<TokenClaims, TokenValidationError> {
            self.tokens
                .get(bearer_token.expose_secret())
                .cloned()
                .ok_or_else(|| TokenValidationError("unknown token".to_owned()))
        }
    }

    /// Accepts `{noop}<plain>` and counts every call.
    #[derive(Default)]
    struct CountingVerifier {
        calls: AtomicUsize,
    }

    impl PasswordVerifier for CountingVerifier {
        fn verify(&self, password: &SecretString, password_hash: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            password_hash
                .strip_prefix("{noop}")
                .is_some_and(|plain| plain == password.expose_secret())
        }
    }

    fn identities() -> HashMap<String, Identity> {
        let alice = Identity::new("alice", "{noop}wonderland")
            .unwrap()
            .grant_authority(RESOLUTION_READ);
        let admin = Identity::new("admin", "{noop}password")
            .unwrap()
            .grant_authority(ADMIN_ROLE);
        let carol = Identity::new("carol", "{noop}password")
            .unwrap()
            .grant_authority(RESOLUTION_READ)
            .enabled(false);

        [alice, admin, carol]
            .into_iter()
            .map(|i| (i.name().to_owned(), i))
            .collect()
    }

    fn tokens() -> HashMap<String, TokenClaims> {
        let mut alice_claims = TokenClaims {
            subject: "alice".to_owned(),
            scopes: authority_set([RESOLUTION_READ, RESOLUTION_WRITE]),
            ..TokenClaims::default()
        };
        alice_claims
            .attributes
            .insert("client_id".to_owned(), serde_json::json!("mobile-app"));

        let ghost_claims = TokenClaims {
            subject: "ghost".to_owned(),
            scopes: authority_set([RESOLUTION_READ]),
            ..TokenClaims::default()
        };

        HashMap::from([
            ("alice-token".to_owned(), alice_claims),
            ("ghost-token".to_owned(), ghost_claims),
        ])
    }

    fn service_with(
        store: Arc<dyn IdentityStoreClient>,
        verifier: Arc<CountingVerifier>,
    ) -> Service {
        let cfg = AuthNResolverConfig::default();
        Service::new(
            store,
            Arc::new(MockValidator { tokens: tokens() }),
            verifier,
            RoleExpander::new(&cfg.roles).unwrap(),
            cfg.store_timeout,
        )
    }

    fn service() -> Service {
        service_with(
            Arc::new(MockStore {
                identities: identities(),
            }),
            Arc::new(CountingVerifier::default()),
        )
    }

    #[tokio::test]
    async fn password_login_uses_expanded_identity_authorities() {
        let principal = service()
            .resolve_principal(&Credential::password("admin", "password"))
            .await
            .unwrap();

        assert_eq!(principal.name(), "admin");
        assert_eq!(
            principal.authorities(),
            &authority_set([ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE])
        );
        assert!(principal.attributes().is_empty());
        assert_eq!(principal.method(), AuthenticationMethod::Password);
    }

    #[tokio::test]
    async fn bearer_token_is_narrowed_to_identity_authorities() {
        let principal = service()
            .resolve_principal(&Credential::bearer("alice-token"))
            .await
            .unwrap();

        assert_eq!(principal.name(), "alice");
        assert_eq!(principal.authorities(), &authority_set([RESOLUTION_READ]));
        assert_eq!(
            principal.attribute("client_id"),
            Some(&serde_json::json!("mobile-app"))
        );
        assert_eq!(principal.method(), AuthenticationMethod::Bearer);
        assert_eq!(
            principal.bearer_token().map(ExposeSecret::expose_secret),
            Some("alice-token")
        );
    }

    #[tokio::test]
    async fn wrong_password_is_bad_credentials() {
        let result = service()
            .resolve_principal(&Credential::password("alice", "nope"))
            .await;

        assert!(matches!(result, Err(DomainError::BadCredentials { name }) if name == "alice"));
    }

    #[tokio::test]
    async fn unknown_user_still_runs_password_check() {
        let verifier = Arc::new(CountingVerifier::default());
        let svc = service_with(
            Arc::new(MockStore {
                identities: identities(),
            }),
            Arc::clone(&verifier),
        );

        let result = svc
            .resolve_principal(&Credential::password("ghost", "password"))
            .await;

        assert!(matches!(result, Err(DomainError::IdentityNotFound { .. })));
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn disabled_identity_is_rejected() {
        let result = service()
            .resolve_principal(&Credential::password("carol", "password"))
            .await;

        assert!(matches!(result, Err(DomainError::IdentityDisabled { .. })));
    }

    #[tokio::test]
    async fn token_for_unknown_subject_is_not_found() {
        let result = service()
            .resolve_principal(&Credential::bearer("ghost-token"))
            .await;

        assert!(matches!(result, Err(DomainError::IdentityNotFound { name }) if name == "ghost"));
    }

    #[tokio::test]
    async fn invalid_token_is_rejected_before_lookup() {
        let result = service()
            .resolve_principal(&Credential::bearer("forged"))
            .await;

        assert!(matches!(result, Err(DomainError::TokenRejected(_))));
    }

    #[tokio::test]
    async fn store_failure_is_not_an_authentication_failure() {
        let svc = service_with(Arc::new(DownStore), Arc::new(CountingVerifier::default()));

        let result = svc
            .resolve_principal(&Credential::password("alice", "wonderland"))
            .await;

        match result {
            Err(e @ DomainError::StoreUnavailable(_)) => assert!(!e.is_rejection()),
            other => panic!("Expected StoreUnavailable, got: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_store_times_out_as_unavailable() {
        let svc = service_with(Arc::new(SlowStore), Arc::new(CountingVerifier::default()));

        let result = svc
            .resolve_principal(&Credential::password("alice", "wonderland"))
            .await;

        assert!(matches!(result, Err(DomainError::StoreUnavailable(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_lookup_never_yields_a_principal() {
        let verifier = Arc::new(CountingVerifier::default());
        let svc = service_with(Arc::new(SlowStore), Arc::clone(&verifier));
        let credential = Credential::password("late", "password");

        let outer = tokio::time::timeout(
            Duration::from_millis(100),
            svc.resolve_principal(&credential),
        )
        .await;

        assert!(outer.is_err());
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }
}
