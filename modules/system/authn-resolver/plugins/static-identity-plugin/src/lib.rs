#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Identity Plugin
//!
//! Supplies the three collaborators the `AuthN` resolver consumes, all backed
//! by configuration:
//!
//! - [`StaticIdentityStore`]: seeded accounts, looked up by name
//! - [`StaticTokenValidator`]: fixed bearer tokens mapped to validated claims
//! - [`DelegatingPasswordVerifier`]: checks `{noop}` and `{sha256}` encoded hashes
//!
//! ## Configuration
//!
//! ```yaml
//! identity:
//!   scope_prefix: "SCOPE_"
//!   users:
//!     - name: "user"
//!       password_hash: "{sha256}5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
//!       authorities: ["resolution:read"]
//!       full_name: "User Userson"
//!   tokens:
//!     - token: "user-read-token"
//!       claims:
//!         subject: "user"
//!         scopes: ["SCOPE_resolution:read"]
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use domain::{DelegatingPasswordVerifier, StaticIdentityStore, StaticTokenValidator};
pub use module::StaticIdentityPlugin;
