//! Contracts for the collaborators consulted by the `AuthN` resolver.
//!
//! Plugins implement these traits; the resolver only ever talks to them
//! through `Arc<dyn ...>` handles handed over at wiring time.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::{IdentityStoreError, TokenValidationError};
use crate::models::{Identity, TokenClaims};

/// Read-only lookup of stored identities.
///
/// The only call in the resolution path that may block or suspend.
#[async_trait]
pub trait IdentityStoreClient: Send + Sync {
    /// Fetch the identity stored under `name`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no such identity exists
    /// - `Unavailable` if the store could not be consulted
    async fn find_by_name(&self, name: &str) -> Result<Identity, IdentityStoreError>;
}

/// Upstream bearer-token validator.
///
/// Signature and issuer verification happen behind this trait; the
/// resolver only ever sees validated claims.
#[async_trait]
pub trait TokenValidatorClient: Send + Sync {
    /// Validate a raw bearer token (without the `Bearer ` prefix).
    ///
    /// # Errors
    ///
    /// Returns [`TokenValidationError`] if the token is not acceptable.
    async fn validate(
        &self,
        bearer_token: &SecretString,
    ) -> Result<TokenClaims, TokenValidationError>;
}

/// Checks a presented password against a stored credential hash.
pub trait PasswordVerifier: Send + Sync {
    /// Returns `true` iff `password` matches `password_hash`.
    fn verify(&self, password: &SecretString, password_hash: &str) -> bool;
}
