//! layer entity for database storage.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use hazatlas_types::{Layer, LayerId};

/// layer database model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "layers")]
pub struct Model {
    /// catalog id, not auto-generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub hazardset_id: String,
    pub hazard_type: String,
    pub typename: Option<String>,
    pub title: String,
    pub srid: Option<String>,
    pub detail_url: Option<String>,
    pub download_url: Option<String>,
    pub owner_organization: Option<String>,
    pub data_update_date: Option<DateTime<Utc>>,
    pub metadata_update_date: Option<DateTime<Utc>>,
    pub calculation_method_quality: Option<i32>,
    pub scientific_quality: Option<i32>,
    pub hazard_period: Option<i32>,
    pub hazard_unit: Option<String>,
    pub return_period: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hazard_set::Entity",
        from = "Column::HazardsetId",
        to = "super::hazard_set::Column::Id"
    )]
    HazardSet,
}

impl Related<super::hazard_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HazardSet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Layer {
    fn from(model: Model) -> Self {
        Layer {
            id: LayerId(model.id),
            hazard_set: model.hazardset_id,
            hazard_type: model.hazard_type,
            typename: model.typename,
            title: model.title,
            srid: model.srid,
            detail_url: model.detail_url,
            download_url: model.download_url,
            owner_organization: model.owner_organization,
            data_update_date: model.data_update_date,
            metadata_update_date: model.metadata_update_date,
            calculation_method_quality: model.calculation_method_quality,
            scientific_quality: model.scientific_quality,
            hazard_period: model.hazard_period,
            hazard_unit: model.hazard_unit,
            return_period: model.return_period,
        }
    }
}

impl From<&Layer> for ActiveModel {
    fn from(layer: &Layer) -> Self {
        ActiveModel {
            id: Set(layer.id.0),
            hazardset_id: Set(layer.hazard_set.clone()),
            hazard_type: Set(layer.hazard_type.clone()),
            typename: Set(layer.typename.clone()),
            title: Set(layer.title.clone()),
            srid: Set(layer.srid.clone()),
            detail_url: Set(layer.detail_url.clone()),
            download_url: Set(layer.download_url.clone()),
            owner_organization: Set(layer.owner_organization.clone()),
            data_update_date: Set(layer.data_update_date),
            metadata_update_date: Set(layer.metadata_update_date),
            calculation_method_quality: Set(layer.calculation_method_quality),
            scientific_quality: Set(layer.scientific_quality),
            hazard_period: Set(layer.hazard_period),
            hazard_unit: Set(layer.hazard_unit.clone()),
            return_period: Set(layer.return_period),
        }
    }
}
