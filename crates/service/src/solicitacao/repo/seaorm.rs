use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::solicitacao::{Model, SolicitacaoFields};

use crate::db::solicitacao_service;
use crate::errors::ServiceError;
use crate::solicitacao::repository::SolicitacaoRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmSolicitacaoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSolicitacaoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl SolicitacaoRepository for SeaOrmSolicitacaoRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        solicitacao_service::list_solicitacoes(&self.db).await
    }

    async fn create(&self, fields: SolicitacaoFields) -> Result<Model, ServiceError> {
        solicitacao_service::create_solicitacao(&self.db, fields).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
        solicitacao_service::get_solicitacao(&self.db, id).await
    }

    async fn replace(&self, id: Uuid, fields: SolicitacaoFields) -> Result<Option<Model>, ServiceError> {
        solicitacao_service::replace_solicitacao(&self.db, id, fields).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        solicitacao_service::delete_solicitacao(&self.db, id).await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        solicitacao_service::ping(&self.db).await
    }
}
