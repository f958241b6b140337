//! Outward error type of the resolutions module.

use thiserror::Error;

/// Errors surfaced to callers of [`ResolutionsClient`](crate::ResolutionsClient).
///
/// Deliberately detail-free: a resolution hidden by its owner check and a
/// resolution that does not exist are both `NotFound`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolutionsError {
    #[error("resolution not found")]
    NotFound,

    #[error("access denied")]
    Forbidden,

    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("authentication required")]
    Unauthenticated,

    #[error("service temporarily unavailable")]
    Unavailable,

    #[error("internal error")]
    Internal,
}
