#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Shared security primitives for the resolutions resolvers.
//!
//! - [`Principal`] - the per-request authenticated identity and its effective authorities
//! - [`AuthoritySet`] - ordered, duplicate-free set of authority strings
//! - [`OwnedResource`] - the single accessor the authorization core needs from a resource

pub mod authority;
pub mod constants;
pub mod principal;
pub mod resource;

pub use authority::{AuthoritySet, authority_set};
pub use principal::{AuthenticationMethod, Principal, PrincipalAttributes, PrincipalBuilder};
pub use resource::OwnedResource;
