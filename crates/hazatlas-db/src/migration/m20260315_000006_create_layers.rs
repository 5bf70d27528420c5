//! create layers table migration.

use sea_orm_migration::prelude::*;

use super::m20260315_000005_create_hazard_sets::HazardSets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Layers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Layers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Layers::HazardsetId).string().not_null())
                    .col(ColumnDef::new(Layers::HazardType).string().not_null())
                    .col(ColumnDef::new(Layers::Typename).string())
                    .col(ColumnDef::new(Layers::Title).string().not_null())
                    .col(ColumnDef::new(Layers::Srid).string())
                    .col(ColumnDef::new(Layers::DetailUrl).string())
                    .col(ColumnDef::new(Layers::DownloadUrl).string())
                    .col(ColumnDef::new(Layers::OwnerOrganization).string())
                    .col(ColumnDef::new(Layers::DataUpdateDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Layers::MetadataUpdateDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Layers::CalculationMethodQuality).integer())
                    .col(ColumnDef::new(Layers::ScientificQuality).integer())
                    .col(ColumnDef::new(Layers::HazardPeriod).integer())
                    .col(ColumnDef::new(Layers::HazardUnit).string())
                    .col(ColumnDef::new(Layers::ReturnPeriod).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_layers_hazardset")
                            .from(Layers::Table, Layers::HazardsetId)
                            .to(HazardSets::Table, HazardSets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // index on hazardset_id for listing a set's layers
        manager
            .create_index(
                Index::create()
                    .name("idx_layers_hazardset_id")
                    .table(Layers::Table)
                    .col(Layers::HazardsetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Layers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Layers {
    #[sea_orm(iden = "layers")]
    Table,
    Id,
    HazardsetId,
    HazardType,
    Typename,
    Title,
    Srid,
    DetailUrl,
    DownloadUrl,
    OwnerOrganization,
    DataUpdateDate,
    MetadataUpdateDate,
    CalculationMethodQuality,
    ScientificQuality,
    HazardPeriod,
    HazardUnit,
    ReturnPeriod,
}
