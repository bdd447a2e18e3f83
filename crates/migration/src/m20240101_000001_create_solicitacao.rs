//! Create `solicitacao` table.
//! One row per service request; the four identifying columns are mandatory.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Solicitacao::Table)
                    .if_not_exists()
                    .col(uuid(Solicitacao::Id).primary_key())
                    .col(string_len(Solicitacao::Requester, 255).not_null())
                    .col(string_len(Solicitacao::Branch, 255).not_null())
                    .col(string_len(Solicitacao::ServiceType, 255).not_null())
                    .col(string_len(Solicitacao::Service, 255).not_null())
                    .col(string_len_null(Solicitacao::Equipment, 255))
                    .col(string_len_null(Solicitacao::Urgency, 64))
                    .col(text_null(Solicitacao::Description))
                    .col(timestamp_with_time_zone_null(Solicitacao::RequestedAt))
                    .col(timestamp_with_time_zone_null(Solicitacao::IssuedAt))
                    .col(string_len_null(Solicitacao::Status, 64))
                    .col(timestamp_with_time_zone_null(Solicitacao::ClosedAt))
                    .col(timestamp_with_time_zone(Solicitacao::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Solicitacao::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Solicitacao::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Solicitacao {
    Table,
    Id,
    Requester,
    Branch,
    ServiceType,
    Service,
    Equipment,
    Urgency,
    Description,
    RequestedAt,
    IssuedAt,
    Status,
    ClosedAt,
    CreatedAt,
    UpdatedAt,
}
