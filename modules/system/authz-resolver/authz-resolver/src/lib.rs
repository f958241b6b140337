//! `AuthZ` Resolver Module
//!
//! Holds the process-wide policy registry. Policies are registered once at
//! startup through a [`PolicyRegistryBuilder`](domain::PolicyRegistryBuilder);
//! the built registry is never mutated and is shared across requests without
//! locking.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;
pub mod module;

pub use domain::{PolicyRegistry, PolicyRegistryBuilder};
pub use module::AuthZResolver;
