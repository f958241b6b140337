//! Local (in-process) client for the resolutions module.

use std::sync::Arc;

use async_trait::async_trait;
use authn_resolver_sdk::{AuthNResolverClient, Credential};
use resolutions_security::Principal;
use uuid::Uuid;

use super::{DomainError, ResolutionRepository, Service};
use crate::api::ResolutionsClient;
use crate::errors::ResolutionsError;
use crate::models::Resolution;

/// Implements [`ResolutionsClient`] over the domain service.
pub struct ResolutionsLocalClient<R: ResolutionRepository> {
    authn: Arc<dyn AuthNResolverClient>,
    svc: Arc<Service<R>>,
}

impl<R: ResolutionRepository> ResolutionsLocalClient<R> {
    #[must_use]
    pub fn new(authn: Arc<dyn AuthNResolverClient>, svc: Arc<Service<R>>) -> Self {
        Self { authn, svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> ResolutionsError {
    if e.is_expected() {
        tracing::debug!(operation = op, error = %e, "resolutions request refused");
    } else {
        tracing::error!(operation = op, error = ?e, "resolutions call failed");
    }
    e.into()
}

#[async_trait]
impl<R: ResolutionRepository + 'static> ResolutionsClient for ResolutionsLocalClient<R> {
    async fn authenticate(&self, credential: &Credential) -> Result<Principal, ResolutionsError> {
        self.authn
            .resolve_principal(credential)
            .await
            .map_err(|e| log_and_convert("authenticate", e.into()))
    }

    async fn list_resolutions(
        &self,
        principal: &Principal,
    ) -> Result<Vec<Resolution>, ResolutionsError> {
        self.svc
            .list_resolutions(principal)
            .await
            .map_err(|e| log_and_convert("list_resolutions", e))
    }

    async fn get_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Resolution, ResolutionsError> {
        self.svc
            .get_resolution(principal, id)
            .await
            .map_err(|e| log_and_convert("get_resolution", e))
    }

    async fn make_resolution(
        &self,
        principal: &Principal,
        text: &str,
    ) -> Result<Resolution, ResolutionsError> {
        self.svc
            .make_resolution(principal, text)
            .await
            .map_err(|e| log_and_convert("make_resolution", e))
    }

    async fn revise_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
        text: &str,
    ) -> Result<Resolution, ResolutionsError> {
        self.svc
            .revise_resolution(principal, id, text)
            .await
            .map_err(|e| log_and_convert("revise_resolution", e))
    }

    async fn complete_resolution(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Resolution, ResolutionsError> {
        self.svc
            .complete_resolution(principal, id)
            .await
            .map_err(|e| log_and_convert("complete_resolution", e))
    }
}
