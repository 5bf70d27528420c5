//! association entity linking hazard categories to administrative divisions.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

/// hazard category / administrative division association database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hazardcategory_administrativedivisions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub administrativedivision_code: i64,
    pub hazardcategory_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::administrative_division::Entity",
        from = "Column::AdministrativedivisionCode",
        to = "super::administrative_division::Column::Code"
    )]
    Division,
    #[sea_orm(
        belongs_to = "super::hazard_category::Entity",
        from = "Column::HazardcategoryId",
        to = "super::hazard_category::Column::Id"
    )]
    Category,
}

impl Related<super::administrative_division::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::hazard_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// build an active model for a new association row.
    pub fn for_new(administrativedivision_code: i64, hazardcategory_id: i32) -> Self {
        Self {
            id: NotSet,
            administrativedivision_code: Set(administrativedivision_code),
            hazardcategory_id: Set(hazardcategory_id),
        }
    }
}
