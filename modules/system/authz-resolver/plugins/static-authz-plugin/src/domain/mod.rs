//! Domain layer for the static `AuthZ` resolver plugin.

pub mod policies;

pub use policies::{HasAuthority, OwnerOrAdmin};
