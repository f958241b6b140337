#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static `AuthZ` Resolver Plugin
//!
//! Provides the built-in policies:
//!
//! - `owner-or-admin`: allow if the principal holds the admin authority, or
//!   owns the resource in context
//! - `has-authority(X)`: allow iff `X` is among the principal's effective
//!   authorities; one policy per configured `X`
//!
//! ## Configuration
//!
//! ```yaml
//! authz:
//!   admin_authority: "ROLE_ADMIN"
//!   authorities: ["resolution:read", "resolution:write"]
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use domain::{HasAuthority, OwnerOrAdmin};
pub use module::StaticAuthZPlugin;
