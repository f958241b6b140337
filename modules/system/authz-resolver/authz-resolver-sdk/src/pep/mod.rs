//! PEP (Policy Enforcement Point) helpers.
//!
//! - [`PolicyEnforcer`] - evaluator for pre-invocation, post-invocation and per-item checks
//! - [`GuardOutcome`] - terminal state of a guarded operation run through [`PolicyEnforcer::guard`]

pub mod enforcer;
pub mod guard;

pub use enforcer::{EnforcerError, PolicyEnforcer};
pub use guard::{GuardOutcome, GuardState};
