//! hazard set data source handler.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;
use crate::handlers::error::{ApiError, OptionExt, ResultExt};
use hazatlas_db::Database;
use hazatlas_types::Layer;

/// layer fields exposed in the data source response.
#[derive(Debug, Serialize)]
pub struct LayerView {
    id: i64,
    title: String,
    typename: Option<String>,
    return_period: Option<i32>,
    hazard_unit: Option<String>,
    detail_url: Option<String>,
    download_url: Option<String>,
}

impl From<Layer> for LayerView {
    fn from(layer: Layer) -> Self {
        Self {
            id: layer.id.0,
            title: layer.title,
            typename: layer.typename,
            return_period: layer.return_period,
            hazard_unit: layer.hazard_unit,
            detail_url: layer.detail_url,
            download_url: layer.download_url,
        }
    }
}

/// data source response body.
#[derive(Debug, Serialize)]
pub struct DataSourceResponse {
    id: String,
    hazard_type: String,
    complete: bool,
    processed: Option<DateTime<Utc>>,
    layers: Vec<LayerView>,
}

/// GET /data_source/{hazardset} - hazard set provenance
///
/// the hazard set with its layers ordered by return period. 400 on an
/// unknown hazard set id, matching the report ui contract.
pub async fn data_source(
    State(state): State<AppState>,
    Path(hazardset_id): Path<String>,
) -> Result<Json<DataSourceResponse>, ApiError> {
    let hazard_set = state
        .db
        .get_hazard_set(&hazardset_id)
        .await
        .map_internal()?
        .or_bad_request("incorrect value for parameter \"hazardset\"")?;

    let layers = state
        .db
        .list_layers_for_hazard_set(&hazardset_id)
        .await
        .map_internal()?;

    Ok(Json(DataSourceResponse {
        id: hazard_set.id,
        hazard_type: hazard_set.hazard_type,
        complete: hazard_set.complete,
        processed: hazard_set.processed,
        layers: layers.into_iter().map(Into::into).collect(),
    }))
}
