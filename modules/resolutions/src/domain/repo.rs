use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::models::{Resolution, ResolutionPatch};

/// Storage port for resolutions.
///
/// Performs no authorization of its own; every call reaches it only after
/// the service's pre-check allowed.
///
/// # Errors
///
/// Implementations report backend failures as [`DomainError::Repository`].
#[async_trait]
pub trait ResolutionRepository: Send + Sync {
    /// All resolutions in insertion order.
    async fn list(&self) -> Result<Vec<Resolution>, DomainError>;

    async fn find(&self, id: Uuid) -> Result<Option<Resolution>, DomainError>;

    async fn insert(&self, resolution: Resolution) -> Result<Resolution, DomainError>;

    /// Apply `patch` to the stored resolution atomically and return the result.
    ///
    /// Fields absent from `patch` keep their stored value, so concurrent
    /// patches touching different fields never undo each other.
    ///
    /// # Errors
    ///
    /// `NotFound` if no resolution with that id is stored.
    async fn patch(&self, id: Uuid, patch: ResolutionPatch) -> Result<Resolution, DomainError>;
}
