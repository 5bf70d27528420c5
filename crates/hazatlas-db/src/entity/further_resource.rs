//! further resource entity for database storage.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use hazatlas_types::FurtherResource;

/// further resource database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "further_resources")]
pub struct Model {
    /// catalog document id, not auto-generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hazardtype_furtherresource::Entity")]
    Associations,
}

impl Related<super::hazardtype_furtherresource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Associations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FurtherResource {
    fn from(model: Model) -> Self {
        FurtherResource {
            id: model.id,
            text: model.text,
        }
    }
}

impl From<&FurtherResource> for ActiveModel {
    fn from(resource: &FurtherResource) -> Self {
        ActiveModel {
            id: Set(resource.id),
            text: Set(resource.text.clone()),
        }
    }
}
