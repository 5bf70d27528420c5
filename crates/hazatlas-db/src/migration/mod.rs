//! database migrations for hazatlas.

pub use sea_orm_migration::prelude::*;

mod m20260315_000001_create_hazard_types;
mod m20260315_000002_create_hazard_levels;
mod m20260315_000003_create_hazard_categories;
mod m20260315_000004_create_regions;
mod m20260315_000005_create_hazard_sets;
mod m20260315_000006_create_layers;
mod m20260315_000007_create_further_resources;
mod m20260318_000008_create_administrative_divisions;
mod m20260318_000009_create_association_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260315_000001_create_hazard_types::Migration),
            Box::new(m20260315_000002_create_hazard_levels::Migration),
            Box::new(m20260315_000003_create_hazard_categories::Migration),
            Box::new(m20260315_000004_create_regions::Migration),
            Box::new(m20260315_000005_create_hazard_sets::Migration),
            Box::new(m20260315_000006_create_layers::Migration),
            Box::new(m20260315_000007_create_further_resources::Migration),
            Box::new(m20260318_000008_create_administrative_divisions::Migration),
            Box::new(m20260318_000009_create_association_tables::Migration),
        ]
    }
}
