//! Guarded-operation state machine.
//!
//! ```text
//! Pending --pre deny--> DeniedPre
//!    |
//!    +--pre allow--> Executing --post deny--> DeniedPost
//!                        |
//!                        +--post allow / no result--> Allowed
//! ```
//!
//! Terminal states are never retried.

use std::future::Future;

use resolutions_security::{OwnedResource, Principal};

use super::enforcer::PolicyEnforcer;
use crate::models::PolicyName;

/// Lifecycle of one guarded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Pending,
    Executing,
    DeniedPre,
    DeniedPost,
    Allowed,
}

impl GuardState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::DeniedPre | Self::DeniedPost | Self::Allowed)
    }
}

/// Terminal result of [`PolicyEnforcer::guard`].
///
/// `Allowed(None)` (nothing found) and `DeniedPost` stay distinct here;
/// callers collapse them into the same outward "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome<T> {
    /// The pre-check denied; the operation never ran.
    DeniedPre,
    /// The operation ran but its result may not be released.
    DeniedPost,
    /// The result (if any) may be released.
    Allowed(Option<T>),
}

impl<T> GuardOutcome<T> {
    #[must_use]
    pub fn state(&self) -> GuardState {
        match self {
            Self::DeniedPre => GuardState::DeniedPre,
            Self::DeniedPost => GuardState::DeniedPost,
            Self::Allowed(_) => GuardState::Allowed,
        }
    }

    /// The released result, treating a post-check deny as not found.
    ///
    /// `DeniedPre` also yields `None`; check [`state`](Self::state) first
    /// when the caller must report it differently.
    #[must_use]
    pub fn into_released(self) -> Option<T> {
        match self {
            Self::Allowed(found) => found,
            Self::DeniedPre | Self::DeniedPost => None,
        }
    }
}

impl PolicyEnforcer {
    /// Run `operation` between a pre-check and an optional post-check.
    ///
    /// `operation` is only invoked when `pre` allows. Without a `post`
    /// policy the result is released as-is.
    ///
    /// # Errors
    ///
    /// Propagates the operation's own error; authorization outcomes are
    /// reported through [`GuardOutcome`].
    pub async fn guard<T, E, F, Fut>(
        &self,
        principal: &Principal,
        pre: &PolicyName,
        post: Option<&PolicyName>,
        operation: F,
    ) -> Result<GuardOutcome<T>, E>
    where
        T: OwnedResource,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        let mut state = GuardState::Pending;

        if !self.authorize_before(principal, pre) {
            transition(&mut state, GuardState::DeniedPre, pre);
            return Ok(GuardOutcome::DeniedPre);
        }
        transition(&mut state, GuardState::Executing, pre);

        let result = operation().await?;

        if let Some(post) = post
            && !self.authorize_after(principal, result.as_ref(), post)
        {
            transition(&mut state, GuardState::DeniedPost, post);
            return Ok(GuardOutcome::DeniedPost);
        }
        transition(&mut state, GuardState::Allowed, post.unwrap_or(pre));

        Ok(GuardOutcome::Allowed(result))
    }
}

fn transition(state: &mut GuardState, next: GuardState, policy: &PolicyName) {
    debug_assert!(!state.is_terminal(), "guard left terminal state {state:?}");
    tracing::trace!(from = ?state, to = ?next, policy = %policy, "guard transition");
    *state = next;
}
