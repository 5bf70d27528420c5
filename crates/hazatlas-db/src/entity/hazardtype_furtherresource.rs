//! association entity linking further resources to hazard types,
//! scoped by region.
//!
//! the association set for a document is fully replaced on each
//! document sync.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

/// hazard type / further resource association database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hazardtype_furtherresources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hazard_type_id: i32,
    pub furtherresource_id: i64,
    pub region_id: i64,
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
        belongs_to = "super::further_resource::Entity",
        from = "Column::FurtherresourceId",
        to = "super::further_resource::Column::Id"
    )]
    FurtherResource,
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id"
    )]
    Region,
}

impl Related<super::hazard_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HazardType.def()
    }
}

impl Related<super::further_resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FurtherResource.def()
    }
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// build an active model for a new association row.
    pub fn for_new(hazard_type_id: i32, furtherresource_id: i64, region_id: i64) -> Self {
        Self {
            id: NotSet,
            hazard_type_id: Set(hazard_type_id),
            furtherresource_id: Set(furtherresource_id),
            region_id: Set(region_id),
        }
    }
}
