//! hazard category entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use hazatlas_types::HazardCategory;

/// hazard category database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hazard_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hazard_type_id: i32,
    pub hazard_level_id: i32,
    pub general_recommendation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hazard_type::Entity",
        from = "Column::HazardTypeId",
        to = "super::hazard_type::Column::Id"
    )]
    HazardType,
    #[sea_orm(
        belongs_to = "super::hazard_level::Entity",
        from = "Column::HazardLevelId",
        to = "super::hazard_level::Column::Id"
    )]
    HazardLevel,
    #[sea_orm(has_many = "super::hazardcategory_admdiv::Entity")]
    DivisionAssociations,
}

impl Related<super::hazard_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HazardType.def()
    }
}

impl Related<super::hazard_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HazardLevel.def()
    }
}

impl Related<super::hazardcategory_admdiv::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DivisionAssociations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HazardCategory {
    fn from(model: Model) -> Self {
        HazardCategory {
            id: model.id,
            hazard_type_id: model.hazard_type_id,
            hazard_level_id: model.hazard_level_id,
            general_recommendation: model.general_recommendation,
        }
    }
}

impl From<&HazardCategory> for ActiveModel {
    fn from(hc: &HazardCategory) -> Self {
        ActiveModel {
            id: if hc.id == 0 { NotSet } else { Set(hc.id) },
            hazard_type_id: Set(hc.hazard_type_id),
            hazard_level_id: Set(hc.hazard_level_id),
            general_recommendation: Set(hc.general_recommendation.clone()),
        }
    }
}
