//! Free-text columns of `solicitacao` become unbounded `text`.
//! Rows written through the API carry no length limit.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_solicitacao::Solicitacao;

const REQUIRED: [Solicitacao; 4] = [
    Solicitacao::Requester,
    Solicitacao::Branch,
    Solicitacao::ServiceType,
    Solicitacao::Service,
];
const OPTIONAL: [Solicitacao; 3] = [Solicitacao::Equipment, Solicitacao::Urgency, Solicitacao::Status];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut alter = Table::alter();
        alter.table(Solicitacao::Table);
        for col in REQUIRED {
            alter.modify_column(ColumnDef::new(col).text().not_null());
        }
        for col in OPTIONAL {
            alter.modify_column(ColumnDef::new(col).text().null());
        }
        manager.alter_table(alter.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut alter = Table::alter();
        alter.table(Solicitacao::Table);
        for col in REQUIRED {
            alter.modify_column(ColumnDef::new(col).string_len(255).not_null());
        }
        alter
            .modify_column(ColumnDef::new(Solicitacao::Equipment).string_len(255).null())
            .modify_column(ColumnDef::new(Solicitacao::Urgency).string_len(64).null())
            .modify_column(ColumnDef::new(Solicitacao::Status).string_len(64).null());
        manager.alter_table(alter.to_owned()).await
    }
}
