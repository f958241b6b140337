//! Resolutions present on a fresh start.

use crate::domain::error::DomainError;
use crate::domain::repo::ResolutionRepository;
use crate::models::Resolution;

/// Owner of every seeded resolution.
pub const SEED_OWNER: &str = "user";

pub const SEED_RESOLUTIONS: [&str; 3] = [
    "Read War and Peace",
    "Free Solo the Eiffel Tower",
    "Hang Christmas Lights",
];

/// Insert the seed resolutions unless the repository already has data.
///
/// # Errors
///
/// Propagates repository failures.
pub async fn seed<R>(repo: &R) -> Result<usize, DomainError>
where
    R: ResolutionRepository + ?Sized,
{
    if !repo.list().await?.is_empty() {
        tracing::debug!("repository not empty; skipping seed");
        return Ok(0);
    }

    for text in SEED_RESOLUTIONS {
        repo.insert(Resolution::new(text, SEED_OWNER)).await?;
    }
    tracing::info!(count = SEED_RESOLUTIONS.len(), "seeded resolutions");
    Ok(SEED_RESOLUTIONS.len())
}
