//! Resolutions Module
//!
//! Owner-scoped resolution records behind the `AuthN`/`AuthZ` resolvers.
//! Every operation takes the caller's [`Principal`](resolutions_security::Principal)
//! explicitly; nothing reads an ambient "current user".
//!
//! | Operation | Pre-check | Result check |
//! |---|---|---|
//! | `list_resolutions` | `has-authority(resolution:read)` | per-item `owner-or-admin` |
//! | `get_resolution` | `has-authority(resolution:read)` | `owner-or-admin`, deny reads as not found |
//! | `make_resolution` | `has-authority(resolution:write)` | none |
//! | `revise_resolution`, `complete_resolution` | `has-authority(resolution:write)` | `owner-or-admin` on the stored record before writing |
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod models;
pub mod module;

pub use api::ResolutionsClient;
pub use config::ResolutionsConfig;
pub use errors::ResolutionsError;
pub use models::{Resolution, ResolutionPatch};
pub use module::Resolutions;
