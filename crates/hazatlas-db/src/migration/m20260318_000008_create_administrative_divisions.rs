//! create administrative_divisions table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdministrativeDivisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdministrativeDivisions::Code)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdministrativeDivisions::LeveltypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdministrativeDivisions::Name).string().not_null())
                    .col(ColumnDef::new(AdministrativeDivisions::ParentCode).big_integer())
                    .col(ColumnDef::new(AdministrativeDivisions::Geom).text())
                    .to_owned(),
            )
            .await?;

        // index on parent_code for child-division lookups in geojson views
        manager
            .create_index(
                Index::create()
                    .name("idx_administrative_divisions_parent_code")
                    .table(AdministrativeDivisions::Table)
                    .col(AdministrativeDivisions::ParentCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(AdministrativeDivisions::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdministrativeDivisions {
    #[sea_orm(iden = "administrative_divisions")]
    Table,
    Code,
    LeveltypeId,
    Name,
    ParentCode,
    Geom,
}
