//! hazard type entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use hazatlas_types::HazardType;

/// hazard type database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hazard_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mnemonic: String,
    pub title: String,
    pub sort_order: i32,
    pub ready: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hazard_set::Entity")]
    HazardSets,
    #[sea_orm(has_many = "super::hazard_category::Entity")]
    Categories,
    #[sea_orm(has_many = "super::hazardtype_furtherresource::Entity")]
    ResourceAssociations,
}

impl Related<super::hazard_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HazardSets.def()
    }
}

impl Related<super::hazard_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::hazardtype_furtherresource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceAssociations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HazardType {
    fn from(model: Model) -> Self {
        HazardType {
            id: model.id,
            mnemonic: model.mnemonic,
            title: model.title,
            order: model.sort_order,
            ready: model.ready,
        }
    }
}

impl From<&HazardType> for ActiveModel {
    fn from(ht: &HazardType) -> Self {
        ActiveModel {
            id: if ht.id == 0 { NotSet } else { Set(ht.id) },
            mnemonic: Set(ht.mnemonic.clone()),
            title: Set(ht.title.clone()),
            sort_order: Set(ht.order),
            ready: Set(ht.ready),
        }
    }
}
