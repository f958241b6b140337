//! Public API trait for the `AuthN` resolver.
//!
//! This trait defines the interface that the guarded-operation layer uses to
//! turn an inbound credential into a [`Principal`].

use async_trait::async_trait;
use resolutions_security::Principal;

use crate::error::AuthNResolverError;
use crate::models::Credential;

/// Public API trait for the `AuthN` resolver.
///
/// ```ignore
/// let principal = authn.resolve_principal(&credential).await?;
/// let allowed = enforcer.authorize_before(&principal, &policy);
/// ```
///
/// # Security
///
/// `Unauthorized` never says whether the account was missing, disabled, or
/// the secret was wrong. Store failures are reported separately so callers
/// never mistake an outage for a bad login.
#[async_trait]
pub trait AuthNResolverClient: Send + Sync {
    /// Resolve a credential into an authenticated principal.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the identity is unknown, disabled, or the credential is invalid
    /// - `StoreUnavailable` if the identity store could not be consulted
    /// - `Internal` for unexpected errors
    async fn resolve_principal(
        &self,
        credential: &Credential,
    ) -> Result<Principal, AuthNResolverError>;
}
