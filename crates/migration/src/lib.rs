//! Migrator for the `solicitacao` table.
//! Indexes are applied after the table exists; later column changes are appended.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_solicitacao;
mod m20240101_000002_add_indexes;
mod m20240101_000003_widen_text_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_solicitacao::Migration),
            Box::new(m20240101_000002_add_indexes::Migration),
            // 已部署的库按顺序执行，新迁移只能追加在末尾
            Box::new(m20240101_000003_widen_text_columns::Migration),
        ]
    }
}
