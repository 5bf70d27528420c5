//! create association tables migration.
//!
//! three many-to-many tables:
//! - hazardtype_furtherresources (with region scope)
//! - hazardcategory_administrativedivisions
//! - region_administrativedivisions

use sea_orm_migration::prelude::*;

use super::m20260315_000001_create_hazard_types::HazardTypes;
use super::m20260315_000003_create_hazard_categories::HazardCategories;
use super::m20260315_000004_create_regions::Regions;
use super::m20260315_000007_create_further_resources::FurtherResources;
use super::m20260318_000008_create_administrative_divisions::AdministrativeDivisions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HazardtypeFurtherresources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HazardtypeFurtherresources::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HazardtypeFurtherresources::HazardTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HazardtypeFurtherresources::FurtherresourceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HazardtypeFurtherresources::RegionId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_htfr_hazard_type")
                            .from(
                                HazardtypeFurtherresources::Table,
                                HazardtypeFurtherresources::HazardTypeId,
                            )
                            .to(HazardTypes::Table, HazardTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_htfr_furtherresource")
                            .from(
                                HazardtypeFurtherresources::Table,
                                HazardtypeFurtherresources::FurtherresourceId,
                            )
                            .to(FurtherResources::Table, FurtherResources::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_htfr_region")
                            .from(
                                HazardtypeFurtherresources::Table,
                                HazardtypeFurtherresources::RegionId,
                            )
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // association replacement during document sync filters by resource id
        manager
            .create_index(
                Index::create()
                    .name("idx_htfr_furtherresource_id")
                    .table(HazardtypeFurtherresources::Table)
                    .col(HazardtypeFurtherresources::FurtherresourceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HazardcategoryAdministrativedivisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HazardcategoryAdministrativedivisions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(
                            HazardcategoryAdministrativedivisions::AdministrativedivisionCode,
                        )
                        .big_integer()
                        .not_null(),
                    )
                    .col(
                        ColumnDef::new(HazardcategoryAdministrativedivisions::HazardcategoryId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hcad_division")
                            .from(
                                HazardcategoryAdministrativedivisions::Table,
                                HazardcategoryAdministrativedivisions::AdministrativedivisionCode,
                            )
                            .to(
                                AdministrativeDivisions::Table,
                                AdministrativeDivisions::Code,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hcad_category")
                            .from(
                                HazardcategoryAdministrativedivisions::Table,
                                HazardcategoryAdministrativedivisions::HazardcategoryId,
                            )
                            .to(HazardCategories::Table, HazardCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hcad_division_code")
                    .table(HazardcategoryAdministrativedivisions::Table)
                    .col(HazardcategoryAdministrativedivisions::AdministrativedivisionCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RegionAdministrativedivisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegionAdministrativedivisions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RegionAdministrativedivisions::RegionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegionAdministrativedivisions::AdministrativedivisionCode)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rad_region")
                            .from(
                                RegionAdministrativedivisions::Table,
                                RegionAdministrativedivisions::RegionId,
                            )
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rad_division")
                            .from(
                                RegionAdministrativedivisions::Table,
                                RegionAdministrativedivisions::AdministrativedivisionCode,
                            )
                            .to(
                                AdministrativeDivisions::Table,
                                AdministrativeDivisions::Code,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rad_division_code")
                    .table(RegionAdministrativedivisions::Table)
                    .col(RegionAdministrativedivisions::AdministrativedivisionCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(RegionAdministrativedivisions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(HazardcategoryAdministrativedivisions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(HazardtypeFurtherresources::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum HazardtypeFurtherresources {
    #[sea_orm(iden = "hazardtype_furtherresources")]
    Table,
    Id,
    HazardTypeId,
    FurtherresourceId,
    RegionId,
}

#[derive(DeriveIden)]
pub enum HazardcategoryAdministrativedivisions {
    #[sea_orm(iden = "hazardcategory_administrativedivisions")]
    Table,
    Id,
    AdministrativedivisionCode,
    HazardcategoryId,
}

#[derive(DeriveIden)]
pub enum RegionAdministrativedivisions {
    #[sea_orm(iden = "region_administrativedivisions")]
    Table,
    Id,
    RegionId,
    AdministrativedivisionCode,
}
