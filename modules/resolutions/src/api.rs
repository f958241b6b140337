//! Public API trait for the resolutions module.

use async_trait::async_trait;
use authn_resolver_sdk::Credential;
use resolutions_security::Principal;
use uuid::Uuid;

use crate::errors::ResolutionsError;
use crate::models::Resolution;

/// Guarded-operation surface consumed by a transport layer.
///
/// The transport resolves the principal once per request with
/// [`authenticate`](Self::authenticate) and passes it to every other call.
#[async_trait]
pub trait ResolutionsClient: Send + Sync {
    /// Resolve a credential into the request's principal.
    ///
    /// # Errors
    ///
    /// - `Unauthenticated` for any rejected credential
    /// - `Unavailable` if the identity store cannot be consulted
    async fn authenticate(&self, credential: &Credential) -> Result<Principal, ResolutionsError>;

    /// Resolutions the principal may see, in storage order.
    ///
    /// # Errors
    ///
    /// `Forbidden` without `resolution:read`.
    async fn list_resolutions(
        &self,
        principal: &Principal,
    ) -> Result<Vec<Resolution>, ResolutionsError>;

    /// # Errors
    ///
    /// - `Forbidden` without `resolution:read`
    /// - `NotFound` if absent or not visible to the principal
    async fn get_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Resolution, ResolutionsError>;

    /// Create a resolution owned by the principal.
    ///
    /// # Errors
    ///
    /// `Forbidden` without `resolution:write`.
    async fn make_resolution(
        &self,
        principal: &Principal,
        text: &str,
    ) -> Result<Resolution, ResolutionsError>;

    /// # Errors
    ///
    /// - `Forbidden` without `resolution:write`
    /// - `NotFound` if absent or not owned by the principal (admins excepted)
    async fn revise_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
        text: &str,
    ) -> Result<Resolution, ResolutionsError>;

    /// # Errors
    ///
    /// Same as [`revise_resolution`](Self::revise_resolution).
    async fn complete_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Resolution, ResolutionsError>;
}
