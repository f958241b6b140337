use std::sync::Arc;

use authz_resolver_sdk::{GuardOutcome, PolicyEnforcer, PolicyName};
use resolutions_security::Principal;
use resolutions_security::constants::{RESOLUTION_READ, RESOLUTION_WRITE};
use uuid::Uuid;

use super::error::DomainError;
use super::repo::ResolutionRepository;
use crate::models::{Resolution, ResolutionPatch};

pub(crate) mod policies {
    use super::{PolicyName, RESOLUTION_READ, RESOLUTION_WRITE};

    pub fn read() -> PolicyName {
        PolicyName::has_authority(RESOLUTION_READ)
    }

    pub fn write() -> PolicyName {
        PolicyName::has_authority(RESOLUTION_WRITE)
    }

    pub fn owner_or_admin() -> PolicyName {
        PolicyName::owner_or_admin()
    }
}

/// Every policy name the service evaluates.
///
/// Checked against the registry at startup so a missing policy fails init
/// instead of silently denying every request.
#[must_use]
pub fn referenced_policies() -> [PolicyName; 3] {
    [
        policies::read(),
        policies::write(),
        policies::owner_or_admin(),
    ]
}

// ============================================================================
// Service Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_text_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_text_length: 500,
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct Service<R: ResolutionRepository> {
    repo: Arc<R>,
    policy_enforcer: PolicyEnforcer,
    config: ServiceConfig,
}

impl<R: ResolutionRepository> Service<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, policy_enforcer: PolicyEnforcer, config: ServiceConfig) -> Self {
        Self {
            repo,
            policy_enforcer,
            config,
        }
    }

    /// Resolutions visible to `principal`, in storage order.
    ///
    /// # Errors
    ///
    /// `Forbidden` without `resolution:read`; repository failures.
    #[tracing::instrument(skip_all, fields(principal = principal.name()))]
    pub async fn list_resolutions(
        &self,
        principal: &Principal,
    ) -> Result<Vec<Resolution>, DomainError> {
        self.policy_enforcer
            .require_before(principal, &policies::read())?;

        let all = self.repo.list().await?;
        let owner_or_admin = policies::owner_or_admin();
        let visible: Vec<Resolution> = self
            .policy_enforcer
            .filter(principal, all, &owner_or_admin)
            .collect();

        tracing::debug!(visible = visible.len(), "listed resolutions");
        Ok(visible)
    }

    /// # Errors
    ///
    /// `Forbidden` without `resolution:read`, `NotFound` when absent or not
    /// visible to `principal`.
    #[tracing::instrument(skip_all, fields(principal = principal.name(), id = %id))]
    pub async fn get_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Resolution, DomainError> {
        self.find_guarded(principal, &policies::read(), id).await
    }

    /// Create a resolution owned by `principal`.
    ///
    /// # Errors
    ///
    /// `Forbidden` without `resolution:write`, `Validation` for empty or
    /// overlong text.
    #[tracing::instrument(skip_all, fields(principal = principal.name()))]
    pub async fn make_resolution(
        &self,
        principal: &Principal,
        text: &str,
    ) -> Result<Resolution, DomainError> {
        self.policy_enforcer
            .require_before(principal, &policies::write())?;
        self.validate_text(text)?;

        let created = self
            .repo
            .insert(Resolution::new(text, principal.name()))
            .await?;
        tracing::info!(id = %created.id, "resolution created");
        Ok(created)
    }

    /// # Errors
    ///
    /// `Forbidden` without `resolution:write`, `NotFound` when absent or
    /// owned by someone else (admins excepted), `Validation` for bad text.
    #[tracing::instrument(skip_all, fields(principal = principal.name(), id = %id))]
    pub async fn revise_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
        text: &str,
    ) -> Result<Resolution, DomainError> {
        // Owners never change, so the loaded snapshot authorizes the patch.
        self.find_guarded(principal, &policies::write(), id).await?;
        self.validate_text(text)?;

        let patch = ResolutionPatch {
            text: Some(text.to_owned()),
            ..ResolutionPatch::default()
        };
        self.repo.patch(id, patch).await
    }

    /// # Errors
    ///
    /// Same as [`revise_resolution`](Self::revise_resolution), minus validation.
    #[tracing::instrument(skip_all, fields(principal = principal.name(), id = %id))]
    pub async fn complete_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Resolution, DomainError> {
        self.find_guarded(principal, &policies::write(), id).await?;

        let patch = ResolutionPatch {
            completed: Some(true),
            ..ResolutionPatch::default()
        };
        self.repo.patch(id, patch).await
    }

    /// Load one resolution between `pre` and the owner-or-admin check.
    ///
    /// A pre deny is `Forbidden`; a post deny is indistinguishable from absence.
    async fn find_guarded(
        &self,
        principal: &Principal,
        pre: &PolicyName,
        id: Uuid,
    ) -> Result<Resolution, DomainError> {
        let outcome = self
            .policy_enforcer
            .guard(principal, pre, Some(&policies::owner_or_admin()), || {
                self.repo.find(id)
            })
            .await?;

        match outcome {
            GuardOutcome::DeniedPre => Err(DomainError::Forbidden {
                policy: pre.to_string(),
            }),
            GuardOutcome::DeniedPost | GuardOutcome::Allowed(None) => Err(DomainError::NotFound),
            GuardOutcome::Allowed(Some(resolution)) => Ok(resolution),
        }
    }

    fn validate_text(&self, text: &str) -> Result<(), DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation("text", "must not be empty"));
        }
        if text.chars().count() > self.config.max_text_length {
            return Err(DomainError::validation(
                "text",
                format!("exceeds maximum length of {}", self.config.max_text_length),
            ));
        }
        Ok(())
    }
}
