//! In-memory resolution storage.

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repo::ResolutionRepository;
use crate::models::{Resolution, ResolutionPatch};

/// Process-local repository backed by an insertion-ordered `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryResolutionRepository {
    rows: RwLock<Vec<Resolution>>,
}

impl InMemoryResolutionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResolutionRepository for InMemoryResolutionRepository {
    async fn list(&self) -> Result<Vec<Resolution>, DomainError> {
        Ok(self.rows.read().clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Resolution>, DomainError> {
        Ok(self.rows.read().iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, resolution: Resolution) -> Result<Resolution, DomainError> {
        let mut rows = self.rows.write();
        if rows.iter().any(|r| r.id == resolution.id) {
            return Err(DomainError::Repository(format!(
                "duplicate resolution id {}",
                resolution.id
            )));
        }
        rows.push(resolution.clone());
        Ok(resolution)
    }

    async fn patch(&self, id: Uuid, patch: ResolutionPatch) -> Result<Resolution, DomainError> {
        let mut rows = self.rows.write();
        let slot = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::NotFound)?;
        patch.apply_to(slot);
        Ok(slot.clone())
    }
}
