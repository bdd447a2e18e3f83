use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;
use models::solicitacao::{self, Entity as SolicitacaoEntity, SolicitacaoFields};
use crate::errors::ServiceError;

/// List all solicitações, oldest first.
pub async fn list_solicitacoes(db: &DatabaseConnection) -> Result<Vec<solicitacao::Model>, ServiceError> {
    let rows = solicitacao::list(db).await?;
    Ok(rows)
}

/// Insert a solicitação; the id is assigned here.
pub async fn create_solicitacao(db: &DatabaseConnection, fields: SolicitacaoFields) -> Result<solicitacao::Model, ServiceError> {
    // validations are in models::solicitacao
    let created = solicitacao::create(db, fields).await?;
    Ok(created)
}

/// Get a solicitação by id.
pub async fn get_solicitacao(db: &DatabaseConnection, id: Uuid) -> Result<Option<solicitacao::Model>, ServiceError> {
    let found = SolicitacaoEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Replace every writable column; `None` if the row is gone.
pub async fn replace_solicitacao(db: &DatabaseConnection, id: Uuid, fields: SolicitacaoFields) -> Result<Option<solicitacao::Model>, ServiceError> {
    let updated = solicitacao::replace(db, id, fields).await?;
    Ok(updated)
}

/// Delete a solicitação; returns true if a row was removed.
pub async fn delete_solicitacao(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let deleted = solicitacao::delete(db, id).await?;
    Ok(deleted)
}

pub async fn ping(db: &DatabaseConnection) -> Result<(), ServiceError> {
    models::db::test_connection(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}
