//! create hazard_levels table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HazardLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HazardLevels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HazardLevels::Mnemonic).string().not_null())
                    .col(ColumnDef::new(HazardLevels::Title).string().not_null())
                    .col(
                        ColumnDef::new(HazardLevels::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hazard_levels_mnemonic")
                    .table(HazardLevels::Table)
                    .col(HazardLevels::Mnemonic)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HazardLevels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HazardLevels {
    #[sea_orm(iden = "hazard_levels")]
    Table,
    Id,
    Mnemonic,
    Title,
    SortOrder,
}
