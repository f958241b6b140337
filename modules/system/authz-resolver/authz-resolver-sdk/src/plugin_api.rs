//! Predicate contract implemented by policy plugins.

use crate::error::PolicyError;
use crate::models::EvaluationContext;

/// A named access predicate.
///
/// Implementations must be pure: no I/O, no state carried between calls.
/// The same instance is evaluated concurrently by many requests.
pub trait Policy: Send + Sync {
    /// Decide whether the context is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if no decision can be made; callers treat
    /// that as a deny.
    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<bool, PolicyError>;
}
