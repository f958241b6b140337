//! `AuthN` Resolver Module
//!
//! Resolves an inbound [`Credential`](authn_resolver_sdk::Credential) into a
//! [`Principal`](resolutions_security::Principal):
//!
//! 1. the identity store supplies the stored account,
//! 2. the [`RoleExpander`](domain::RoleExpander) turns coarse roles into fine-grained authorities,
//! 3. [`reconcile`](domain::reconcile) narrows them by the token's scopes when a token is involved,
//! 4. [`build_principal`](domain::build_principal) freezes the result.
//!
//! Provides the `AuthNResolverClient` trait implementation for the
//! guarded-operation layer.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::AuthNResolverConfig;
pub use module::AuthNResolver;
