use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::solicitacao::Model;

use super::domain::SolicitacaoInput;
use super::repository::SolicitacaoRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "record";

/// Solicitação business service independent of web framework.
///
/// Holds no state of its own; every call goes to the repository.
pub struct SolicitacaoService {
    repo: Arc<dyn SolicitacaoRepository>,
}

impl SolicitacaoService {
    pub fn new(repo: Arc<dyn SolicitacaoRepository>) -> Self { Self { repo } }

    /// Validate and persist a new solicitação.
    ///
    /// # Examples
    /// ```
    /// use service::solicitacao::{SolicitacaoService, domain::SolicitacaoInput, repository::mock::MockSolicitacaoRepository};
    /// use std::sync::Arc;
    /// let svc = SolicitacaoService::new(Arc::new(MockSolicitacaoRepository::default()));
    /// let input = SolicitacaoInput {
    ///     requester: Some("Ana".into()),
    ///     branch: Some("SP".into()),
    ///     service_type: Some("Manutenção".into()),
    ///     service: Some("Troca de óleo".into()),
    ///     ..Default::default()
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.requester, "Ana");
    /// ```
    #[instrument(skip_all)]
    pub async fn create(&self, input: SolicitacaoInput) -> Result<Model, ServiceError> {
        let fields = input.into_fields()?;
        let created = self.repo.create(fields).await?;
        info!(id = %created.id, branch = %created.branch, "solicitacao_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    /// Full replacement of an existing solicitação.
    ///
    /// Existence is checked before the body is validated: an unknown id is
    /// `NotFound` whatever the body holds.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn update(&self, id: Uuid, input: SolicitacaoInput) -> Result<Model, ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found(ENTITY));
        }
        let fields = input.into_fields()?;
        match self.repo.replace(id, fields).await? {
            Some(updated) => {
                info!(status = ?updated.status, "solicitacao_updated");
                Ok(updated)
            }
            None => {
                warn!("solicitacao vanished between lookup and update");
                Err(ServiceError::not_found(ENTITY))
            }
        }
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found(ENTITY));
        }
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!("solicitacao_deleted");
        Ok(())
    }

    /// Connectivity check against the persistence collaborator.
    pub async fn health(&self) -> Result<(), ServiceError> {
        self.repo.ping().await
    }
}
