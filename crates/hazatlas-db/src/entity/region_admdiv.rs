//! association entity linking catalog regions to administrative divisions.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

/// region / administrative division association database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "region_administrativedivisions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_id: i64,
    pub administrativedivision_code: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::administrative_division::Entity",
        from = "Column::AdministrativedivisionCode",
        to = "super::administrative_division::Column::Code"
    )]
    Division,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::administrative_division::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// build an active model for a new association row.
    pub fn for_new(region_id: i64, administrativedivision_code: i64) -> Self {
        Self {
            id: NotSet,
            region_id: Set(region_id),
            administrativedivision_code: Set(administrativedivision_code),
        }
    }
}
