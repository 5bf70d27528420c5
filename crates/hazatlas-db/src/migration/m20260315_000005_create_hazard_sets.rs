//! create hazard_sets table migration.

use sea_orm_migration::prelude::*;

use super::m20260315_000001_create_hazard_types::HazardTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HazardSets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HazardSets::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HazardSets::HazardTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HazardSets::Complete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(HazardSets::Processed).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hazard_sets_type")
                            .from(HazardSets::Table, HazardSets::HazardTypeId)
                            .to(HazardTypes::Table, HazardTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HazardSets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HazardSets {
    #[sea_orm(iden = "hazard_sets")]
    Table,
    Id,
    HazardTypeId,
    Complete,
    Processed,
}
