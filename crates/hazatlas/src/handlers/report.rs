//! per-division hazard report handlers.
//!
//! thin read queries over already-computed state: the overview lists
//! every ready hazard type with the division's assigned level, the
//! category view adds the recommendation and further resources, and the
//! geojson view returns the division and its children with stored
//! geometry.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::handlers::error::{ApiError, OptionExt, ResultExt};
use hazatlas_db::Database;
use hazatlas_types::{AdministrativeDivision, HazardLevel};

/// hazard level order used for entries without data, sorted last.
const NO_DATA_ORDER: i32 = i32::MAX;

/// hazard type fields exposed in report responses.
#[derive(Debug, Serialize)]
pub struct HazardTypeView {
    mnemonic: String,
    title: String,
}

/// hazard level fields exposed in report responses.
#[derive(Debug, Serialize)]
pub struct HazardLevelView {
    mnemonic: String,
    title: String,
}

impl HazardLevelView {
    fn no_data() -> Self {
        Self {
            mnemonic: "no-data".to_string(),
            title: "No Data".to_string(),
        }
    }
}

impl From<&HazardLevel> for HazardLevelView {
    fn from(level: &HazardLevel) -> Self {
        Self {
            mnemonic: level.mnemonic.clone(),
            title: level.title.clone(),
        }
    }
}

/// division fields exposed in report responses.
#[derive(Debug, Serialize)]
pub struct DivisionView {
    code: i64,
    name: String,
    leveltype_id: i32,
}

impl From<&AdministrativeDivision> for DivisionView {
    fn from(division: &AdministrativeDivision) -> Self {
        Self {
            code: division.code,
            name: division.name.clone(),
            leveltype_id: division.leveltype_id,
        }
    }
}

/// one hazard type row of the overview report.
#[derive(Debug, Serialize)]
pub struct OverviewEntry {
    hazardtype: HazardTypeView,
    hazardlevel: HazardLevelView,
}

/// overview report response body.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    division: DivisionView,
    hazards: Vec<OverviewEntry>,
}

/// GET /report/{divisioncode} - overview report
///
/// every ready hazard type with the division's hazard level, most
/// severe first; hazard types without data come last with the
/// "no-data" sentinel level.
pub async fn report_overview(
    State(state): State<AppState>,
    Path(division_code): Path<i64>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let division = state
        .db
        .get_division(division_code)
        .await
        .map_internal()?
        .or_not_found("unknown division code")?;

    let hazard_types = state.db.list_hazard_types().await.map_internal()?;

    let mut entries = Vec::new();
    for hazard_type in hazard_types.into_iter().filter(|ht| ht.ready) {
        let info = state
            .db
            .get_category_info(division_code, &hazard_type.mnemonic)
            .await
            .map_internal()?;

        let (level_view, order) = match &info {
            Some(info) => ((&info.hazard_level).into(), info.hazard_level.order),
            None => (HazardLevelView::no_data(), NO_DATA_ORDER),
        };

        entries.push((
            OverviewEntry {
                hazardtype: HazardTypeView {
                    mnemonic: hazard_type.mnemonic,
                    title: hazard_type.title,
                },
                hazardlevel: level_view,
            },
            order,
        ));
    }

    entries.sort_by_key(|(_, order)| *order);

    Ok(Json(OverviewResponse {
        division: (&division).into(),
        hazards: entries.into_iter().map(|(entry, _)| entry).collect(),
    }))
}

/// one further resource row of the category report.
#[derive(Debug, Serialize)]
pub struct ResourceView {
    id: i64,
    text: String,
    url: String,
}

/// category report response body.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    division: DivisionView,
    hazardtype: HazardTypeView,
    hazardlevel: HazardLevelView,
    general_recommendation: Option<String>,
    resources: Vec<ResourceView>,
}

/// GET /report/{divisioncode}/{hazardtype} - category report
///
/// hazard level, recommendation and further resources for one
/// (division, hazard type) pair. 404 when no category exists for the
/// pair.
pub async fn report_category(
    State(state): State<AppState>,
    Path((division_code, hazard_type)): Path<(i64, String)>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let division = state
        .db
        .get_division(division_code)
        .await
        .map_internal()?
        .or_not_found("unknown division code")?;

    let info = state
        .db
        .get_category_info(division_code, &hazard_type)
        .await
        .map_internal()?
        .or_not_found("no data available for this division and hazard type")?;

    let resources = state
        .db
        .list_further_resources_for(division_code, &hazard_type)
        .await
        .map_internal()?
        .into_iter()
        .map(|resource| ResourceView {
            id: resource.id,
            url: format!("{}/documents/{}", state.config.geonode.url, resource.id),
            text: resource.text,
        })
        .collect();

    Ok(Json(CategoryResponse {
        division: (&division).into(),
        hazardtype: HazardTypeView {
            mnemonic: info.hazard_type.mnemonic,
            title: info.hazard_type.title,
        },
        hazardlevel: (&info.hazard_level).into(),
        general_recommendation: info.general_recommendation,
        resources,
    }))
}

/// query parameters for the geojson report.
#[derive(Debug, Deserialize)]
pub struct GeojsonParams {
    /// restrict hazard level properties to one hazard type
    pub hazardtype: Option<String>,
}

/// a geojson feature for one division.
#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
    geometry: Option<serde_json::Value>,
    properties: FeatureProperties,
}

/// properties of a division feature.
#[derive(Debug, Serialize)]
pub struct FeatureProperties {
    name: String,
    code: i64,
    #[serde(rename = "hazardLevelMnemonic", skip_serializing_if = "Option::is_none")]
    hazard_level_mnemonic: Option<String>,
    #[serde(rename = "hazardLevelTitle", skip_serializing_if = "Option::is_none")]
    hazard_level_title: Option<String>,
}

/// geojson feature collection response body.
#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    collection_type: &'static str,
    features: Vec<Feature>,
}

/// GET /report/{divisioncode}/geojson - division geometries
///
/// the division and its direct children as a feature collection, with
/// stored geojson geometry. with `?hazardtype=` each feature carries
/// the division's hazard level for that type.
pub async fn report_geojson(
    State(state): State<AppState>,
    Path(division_code): Path<i64>,
    Query(params): Query<GeojsonParams>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let division = state
        .db
        .get_division(division_code)
        .await
        .map_internal()?
        .or_not_found("unknown division code")?;

    let mut divisions = vec![division];
    divisions.extend(
        state
            .db
            .list_child_divisions(division_code)
            .await
            .map_internal()?,
    );

    let mut features = Vec::with_capacity(divisions.len());
    for division in divisions {
        let level = match &params.hazardtype {
            Some(hazard_type) => state
                .db
                .get_category_info(division.code, hazard_type)
                .await
                .map_internal()?
                .map(|info| info.hazard_level),
            None => None,
        };

        features.push(Feature {
            feature_type: "Feature",
            geometry: division.geom,
            properties: FeatureProperties {
                name: division.name,
                code: division.code,
                hazard_level_mnemonic: level.as_ref().map(|l| l.mnemonic.clone()),
                hazard_level_title: level.as_ref().map(|l| l.title.clone()),
            },
        });
    }

    Ok(Json(FeatureCollection {
        collection_type: "FeatureCollection",
        features,
    }))
}
