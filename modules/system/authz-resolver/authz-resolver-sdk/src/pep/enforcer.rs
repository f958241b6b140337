//! Policy Enforcement Point (`PEP`) object.
//!
//! [`PolicyEnforcer`] answers the three authorization questions of a
//! guarded operation:
//!
//! - may this call start ([`PolicyEnforcer::authorize_before`])
//! - may this result be released ([`PolicyEnforcer::authorize_after`])
//! - does this item pass ([`PolicyEnforcer::filter`])
//!
//! Constructed once during service initialisation with the `AuthZ` client.
//! Every ambiguity resolves to deny: an unregistered policy, a policy that
//! errors or panics, a policy that needs a resource and gets none.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use resolutions_security::{OwnedResource, Principal};

use crate::api::AuthZResolverClient;
use crate::error::PolicyError;
use crate::models::{EvaluationContext, PolicyName};
use crate::plugin_api::Policy;

/// Error from the PEP enforcement flow.
///
/// Carries the policy for logging only; callers must not expose it.
#[derive(Debug, thiserror::Error)]
pub enum EnforcerError {
    /// The policy denied access (or could not be evaluated).
    #[error("access denied")]
    Denied {
        /// The policy that denied.
        policy: PolicyName,
    },
}

/// Policy Enforcement Point.
///
/// Holds the `AuthZ` client. Constructed once during service init;
/// cloneable and cheap to pass around (`Arc` inside). Holds no per-request
/// state, so one enforcer serves all concurrent requests.
///
/// # Example
///
/// ```ignore
/// use authz_resolver_sdk::{PolicyEnforcer, PolicyName};
///
/// let enforcer = PolicyEnforcer::new(authz.clone());
///
/// if !enforcer.authorize_before(&principal, &PolicyName::has_authority("resolution:read")) {
///     return Err(Forbidden);
/// }
/// let visible: Vec<_> = enforcer
///     .filter(&principal, repo.list(), &PolicyName::owner_or_admin())
///     .collect();
/// ```
#[derive(Clone)]
pub struct PolicyEnforcer {
    authz: Arc<dyn AuthZResolverClient>,
}

impl PolicyEnforcer {
    /// Create a new enforcer.
    pub fn new(authz: Arc<dyn AuthZResolverClient>) -> Self {
        Self { authz }
    }

    /// Pre-invocation check: evaluate `policy` with only the principal in context.
    ///
    /// A deny must stop the guarded operation from running at all.
    #[must_use]
    pub fn authorize_before(&self, principal: &Principal, policy: &PolicyName) -> bool {
        let Some(predicate) = self.lookup(policy) else {
            return false;
        };
        decide(
            predicate.as_ref(),
            &EvaluationContext::new(principal, policy),
        )
    }

    /// Post-invocation check on an operation's optional result.
    ///
    /// An absent result always allows: there is nothing to protect and the
    /// caller reports "not found". A present result is evaluated with the
    /// resource in context; a deny must be reported exactly like not found.
    #[must_use]
    pub fn authorize_after<R>(
        &self,
        principal: &Principal,
        resource: Option<&R>,
        policy: &PolicyName,
    ) -> bool
    where
        R: OwnedResource,
    {
        let Some(resource) = resource else {
            return true;
        };
        let Some(predicate) = self.lookup(policy) else {
            return false;
        };
        decide(
            predicate.as_ref(),
            &EvaluationContext::new(principal, policy).with_resource(resource),
        )
    }

    /// Per-item filter over a produced sequence.
    ///
    /// Lazy: items are evaluated as the returned iterator is driven. Order
    /// of surviving items is preserved. An item whose evaluation fails is
    /// dropped and logged; the remaining items are still evaluated.
    pub fn filter<'a, I>(
        &self,
        principal: &'a Principal,
        resources: I,
        policy: &'a PolicyName,
    ) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: OwnedResource,
    {
        let predicate = self.lookup(policy);

        resources
            .into_iter()
            .enumerate()
            .filter_map(move |(item_index, item)| {
                let predicate = predicate.as_deref()?;
                let ctx = EvaluationContext::new(principal, policy).with_resource(&item);
                match evaluate_isolated(predicate, &ctx) {
                    Ok(true) => Some(item),
                    Ok(false) => None,
                    Err(e) => {
                        tracing::warn!(
                            policy = %policy,
                            item_index,
                            error = %e,
                            "policy evaluation failed for item; dropping it"
                        );
                        None
                    }
                }
            })
    }

    /// [`authorize_before`](Self::authorize_before) as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`EnforcerError::Denied`] on deny.
    pub fn require_before(
        &self,
        principal: &Principal,
        policy: &PolicyName,
    ) -> Result<(), EnforcerError> {
        if self.authorize_before(principal, policy) {
            Ok(())
        } else {
            Err(denied(principal, policy))
        }
    }

    /// [`authorize_after`](Self::authorize_after) as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`EnforcerError::Denied`] on deny.
    pub fn require_after<R>(
        &self,
        principal: &Principal,
        resource: Option<&R>,
        policy: &PolicyName,
    ) -> Result<(), EnforcerError>
    where
        R: OwnedResource,
    {
        if self.authorize_after(principal, resource, policy) {
            Ok(())
        } else {
            Err(denied(principal, policy))
        }
    }

    fn lookup(&self, policy: &PolicyName) -> Option<Arc<dyn Policy>> {
        let found = self.authz.policy(policy);
        if found.is_none() {
            tracing::warn!(policy = %policy, "policy not registered; denying");
        }
        found
    }
}

/// Evaluate `predicate`, turning a panic inside it into a [`PolicyError`].
///
/// Predicates come from the application's registry; one that panics must
/// deny like one that errors, and must not abort a whole filter pass.
fn evaluate_isolated(
    predicate: &dyn Policy,
    ctx: &EvaluationContext<'_>,
) -> Result<bool, PolicyError> {
    panic::catch_unwind(AssertUnwindSafe(|| predicate.evaluate(ctx)))
        .unwrap_or_else(|_| Err(PolicyError::Failed("predicate panicked".to_owned())))
}

fn decide(predicate: &dyn Policy, ctx: &EvaluationContext<'_>) -> bool {
    match evaluate_isolated(predicate, ctx) {
        Ok(allowed) => allowed,
        Err(e) => {
            log_policy_error(ctx.policy(), &e);
            false
        }
    }
}

fn log_policy_error(policy: &PolicyName, e: &PolicyError) {
    tracing::warn!(policy = %policy, error = %e, "policy evaluation failed; denying");
}

fn denied(principal: &Principal, policy: &PolicyName) -> EnforcerError {
    tracing::debug!(principal = principal.name(), policy = %policy, "access denied");
    EnforcerError::Denied {
        policy: policy.clone(),
    }
}

impl std::fmt::Debug for PolicyEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEnforcer").finish_non_exhaustive()
    }
}
