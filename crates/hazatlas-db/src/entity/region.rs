//! region entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use hazatlas_types::{Region, RegionId};

/// region database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "regions")]
pub struct Model {
    /// catalog id, not auto-generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hazardtype_furtherresource::Entity")]
    ResourceAssociations,
    #[sea_orm(has_many = "super::region_admdiv::Entity")]
    DivisionAssociations,
}

impl Related<super::hazardtype_furtherresource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceAssociations.def()
    }
}

impl Related<super::region_admdiv::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DivisionAssociations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Region {
    fn from(model: Model) -> Self {
        Region {
            id: RegionId(model.id),
            name: model.name,
            level: model.level,
        }
    }
}

impl From<&Region> for ActiveModel {
    fn from(region: &Region) -> Self {
        ActiveModel {
            id: Set(region.id.0),
            name: Set(region.name.clone()),
            level: Set(region.level),
        }
    }
}
