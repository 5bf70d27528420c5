//! administrative division entity for database storage.
//!
//! divisions are written by a separate import pipeline; the report
//! views only read them. geometry is stored as geojson text.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use hazatlas_types::AdministrativeDivision;

/// administrative division database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "administrative_divisions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: i64,
    pub leveltype_id: i32,
    pub name: String,
    pub parent_code: Option<i64>,
    pub geom: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hazardcategory_admdiv::Entity")]
    CategoryAssociations,
    #[sea_orm(has_many = "super::region_admdiv::Entity")]
    RegionAssociations,
}

impl Related<super::hazardcategory_admdiv::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryAssociations.def()
    }
}

impl Related<super::region_admdiv::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegionAssociations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AdministrativeDivision {
    fn from(model: Model) -> Self {
        // geometry is stored verbatim, invalid json becomes none
        let geom = model
            .geom
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok());

        AdministrativeDivision {
            code: model.code,
            leveltype_id: model.leveltype_id,
            name: model.name,
            parent_code: model.parent_code,
            geom,
        }
    }
}

impl From<&AdministrativeDivision> for ActiveModel {
    fn from(division: &AdministrativeDivision) -> Self {
        ActiveModel {
            code: Set(division.code),
            leveltype_id: Set(division.leveltype_id),
            name: Set(division.name.clone()),
            parent_code: Set(division.parent_code),
            geom: Set(division.geom.as_ref().map(|g| g.to_string())),
        }
    }
}
