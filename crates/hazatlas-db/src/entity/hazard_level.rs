//! hazard level entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use hazatlas_types::HazardLevel;

/// hazard level database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hazard_levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mnemonic: String,
    pub title: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hazard_category::Entity")]
    Categories,
}

impl Related<super::hazard_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HazardLevel {
    fn from(model: Model) -> Self {
        HazardLevel {
            id: model.id,
            mnemonic: model.mnemonic,
            title: model.title,
            order: model.sort_order,
        }
    }
}

impl From<&HazardLevel> for ActiveModel {
    fn from(hl: &HazardLevel) -> Self {
        ActiveModel {
            id: if hl.id == 0 { NotSet } else { Set(hl.id) },
            mnemonic: Set(hl.mnemonic.clone()),
            title: Set(hl.title.clone()),
            sort_order: Set(hl.order),
        }
    }
}
