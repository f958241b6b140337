//! Domain layer for the static identity plugin.

pub mod store;
pub mod validator;
pub mod verifier;

pub use store::StaticIdentityStore;
pub use validator::StaticTokenValidator;
pub use verifier::DelegatingPasswordVerifier;
