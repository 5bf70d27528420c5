//! create hazard_types table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HazardTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HazardTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HazardTypes::Mnemonic).string().not_null())
                    .col(ColumnDef::new(HazardTypes::Title).string().not_null())
                    .col(
                        ColumnDef::new(HazardTypes::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HazardTypes::Ready)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // mnemonic is the natural key used by harvesting and report urls
        manager
            .create_index(
                Index::create()
                    .name("idx_hazard_types_mnemonic")
                    .table(HazardTypes::Table)
                    .col(HazardTypes::Mnemonic)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HazardTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HazardTypes {
    #[sea_orm(iden = "hazard_types")]
    Table,
    Id,
    Mnemonic,
    Title,
    SortOrder,
    Ready,
}
