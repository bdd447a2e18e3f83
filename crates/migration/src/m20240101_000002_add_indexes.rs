//! Secondary indexes for `solicitacao`.
//! Listing is ordered by `created_at`.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_solicitacao::Solicitacao;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_solicitacao_created_at")
                    .table(Solicitacao::Table)
                    .col(Solicitacao::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_solicitacao_created_at")
                    .table(Solicitacao::Table)
                    .to_owned(),
            )
            .await
    }
}
