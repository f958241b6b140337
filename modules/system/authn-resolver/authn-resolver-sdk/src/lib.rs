//! `AuthN` Resolver SDK
//!
//! This crate provides the public API for the `authn_resolver` module:
//!
//! - [`AuthNResolverClient`] - Public API trait for consumers (`resolve_principal`)
//! - [`IdentityStoreClient`], [`TokenValidatorClient`], [`PasswordVerifier`] -
//!   contracts for the external collaborators the resolver consults
//! - [`Identity`], [`TokenClaims`], [`Credential`] - Models
//! - [`AuthNResolverError`], [`IdentityStoreError`], [`TokenValidationError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use authn_resolver_sdk::{AuthNResolverClient, Credential};
//!
//! let principal = authn
//!     .resolve_principal(&Credential::password("alice", "secret"))
//!     .await?;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::AuthNResolverClient;
pub use error::{AuthNResolverError, IdentityStoreError, InvalidIdentity, TokenValidationError};
pub use models::{Credential, Identity, TokenClaims};
pub use plugin_api::{IdentityStoreClient, PasswordVerifier, TokenValidatorClient};
