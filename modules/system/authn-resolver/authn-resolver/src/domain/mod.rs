//! Domain layer for the `AuthN` resolver.

pub mod error;
pub mod expander;
pub mod local_client;
pub mod principal_builder;
pub mod reconciler;
pub mod service;

pub use error::DomainError;
pub use expander::{RoleExpander, RoleExpansionError};
pub use local_client::AuthNResolverLocalClient;
pub use principal_builder::{ValidatedToken, build_principal};
pub use reconciler::reconcile;
pub use service::Service;
