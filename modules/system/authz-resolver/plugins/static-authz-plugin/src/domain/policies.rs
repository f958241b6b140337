//! Built-in policy predicates.

use authz_resolver_sdk::{EvaluationContext, Policy, PolicyError};

/// Allow if the principal holds the admin authority, or is the resource owner.
///
/// Without a resource in context only the admin branch can allow; a
/// non-admin gets [`PolicyError::MissingResource`], which denies.
#[derive(Debug, Clone)]
pub struct OwnerOrAdmin {
    admin_authority: String,
}

impl OwnerOrAdmin {
    #[must_use]
    pub fn new(admin_authority: impl Into<String>) -> Self {
        Self {
            admin_authority: admin_authority.into(),
        }
    }
}

impl Policy for OwnerOrAdmin {
    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<bool, PolicyError> {
        let principal = ctx.principal();
        if principal.has_authority(&self.admin_authority) {
            return Ok(true);
        }
        let resource = ctx.resource().ok_or(PolicyError::MissingResource)?;
        Ok(resource.owner() == principal.name())
    }
}

/// Allow iff the principal holds one exact authority.
#[derive(Debug, Clone)]
pub struct HasAuthority {
    authority: String,
}

impl HasAuthority {
    #[must_use]
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }
}

impl Policy for HasAuthority {
    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<bool, PolicyError> {
        Ok(ctx.principal().has_authority(&self.authority))
    }
}
