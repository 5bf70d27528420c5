//! hazard set entity for database storage.
//!
//! the primary key is the `hazard_set` string key shared by the owned
//! layers, as assigned by the remote catalog.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

/// hazard set database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hazard_sets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub hazard_type_id: i32,
    pub complete: bool,
    pub processed: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hazard_type::Entity",
        from = "Column::HazardTypeId",
        to = "super::hazard_type::Column::Id"
    )]
    HazardType,
    #[sea_orm(has_many = "super::layer::Entity")]
    Layers,
}

impl Related<super::hazard_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HazardType.def()
    }
}

impl Related<super::layer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Layers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// convert to the domain type, given the resolved hazard-type mnemonic.
    pub fn into_hazard_set(self, hazard_type: String) -> hazatlas_types::HazardSet {
        hazatlas_types::HazardSet {
            id: self.id,
            hazard_type,
            complete: self.complete,
            processed: self.processed,
        }
    }
}

impl ActiveModel {
    /// build an active model for a new hazard set row.
    pub fn for_new(id: &str, hazard_type_id: i32) -> Self {
        Self {
            id: Set(id.to_string()),
            hazard_type_id: Set(hazard_type_id),
            complete: Set(false),
            processed: Set(None),
        }
    }
}
