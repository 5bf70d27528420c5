//! create regions table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Regions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Regions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Regions::Name).string().not_null())
                    .col(ColumnDef::new(Regions::Level).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // region names come from the catalog and are resolved during
        // document sync
        manager
            .create_index(
                Index::create()
                    .name("idx_regions_name")
                    .table(Regions::Table)
                    .col(Regions::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Regions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Regions {
    #[sea_orm(iden = "regions")]
    Table,
    Id,
    Name,
    Level,
}
