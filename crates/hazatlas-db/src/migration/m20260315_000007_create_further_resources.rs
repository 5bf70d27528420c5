//! create further_resources table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FurtherResources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FurtherResources::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FurtherResources::Text).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FurtherResources::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FurtherResources {
    #[sea_orm(iden = "further_resources")]
    Table,
    Id,
    Text,
}
