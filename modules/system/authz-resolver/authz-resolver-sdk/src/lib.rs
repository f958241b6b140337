#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! `AuthZ` Resolver SDK
//!
//! This crate provides the public API for the `authz_resolver` module:
//!
//! - [`AuthZResolverClient`] - Registry lookup trait for consumers
//! - [`Policy`] - Predicate trait for policy implementations
//! - [`PolicyName`], [`EvaluationContext`] - Evaluation models
//! - [`AuthZResolverError`], [`PolicyError`] - Error types
//! - [`pep`] - PEP helpers ([`PolicyEnforcer`], [`GuardOutcome`])
//!
//! ## Usage
//!
//! ```ignore
//! use authz_resolver_sdk::{PolicyEnforcer, PolicyName};
//!
//! // Create an enforcer (once, during init)
//! let enforcer = PolicyEnforcer::new(authz);
//!
//! // Pre-check, no resource yet
//! enforcer.require_before(&principal, &PolicyName::has_authority("resolution:write"))?;
//!
//! // Post-check on a single result; deny reads as not found
//! let found = repo.get(id);
//! if !enforcer.authorize_after(&principal, found.as_ref(), &PolicyName::owner_or_admin()) {
//!     return Err(NotFound);
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod pep;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::AuthZResolverClient;
pub use error::{AuthZResolverError, PolicyError};
pub use models::{EvaluationContext, OWNER_OR_ADMIN, PolicyName};
pub use pep::{EnforcerError, GuardOutcome, GuardState, PolicyEnforcer};
pub use plugin_api::Policy;
