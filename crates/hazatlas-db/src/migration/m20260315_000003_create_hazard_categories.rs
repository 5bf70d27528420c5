//! create hazard_categories table migration.

use sea_orm_migration::prelude::*;

use super::m20260315_000001_create_hazard_types::HazardTypes;
use super::m20260315_000002_create_hazard_levels::HazardLevels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HazardCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HazardCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HazardCategories::HazardTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HazardCategories::HazardLevelId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HazardCategories::GeneralRecommendation).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hazard_categories_type")
                            .from(HazardCategories::Table, HazardCategories::HazardTypeId)
                            .to(HazardTypes::Table, HazardTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hazard_categories_level")
                            .from(HazardCategories::Table, HazardCategories::HazardLevelId)
                            .to(HazardLevels::Table, HazardLevels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hazard_categories_type")
                    .table(HazardCategories::Table)
                    .col(HazardCategories::HazardTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HazardCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HazardCategories {
    #[sea_orm(iden = "hazard_categories")]
    Table,
    Id,
    HazardTypeId,
    HazardLevelId,
    GeneralRecommendation,
}
