//! integration tests for the report endpoints
//!
//! seeds an in-memory database and drives the router directly.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use hazatlas::create_app;
use hazatlas_db::{Database, HazatlasDb};
use hazatlas_types::{
    AdministrativeDivision, Config, FurtherResource, HazardCategory, HazardLevel, HazardType,
    Layer, LayerId, Region, RegionId,
};
use hazatlas_db::ResourceAssociation;

async fn seeded_db() -> HazatlasDb {
    let db = HazatlasDb::new_in_memory()
        .await
        .expect("failed to create in-memory database");

    // hazard types: FL and EQ are ready, DG is not
    let fl = db
        .create_hazard_type(&HazardType {
            id: 0,
            mnemonic: "FL".to_string(),
            title: "River flood".to_string(),
            order: 1,
            ready: true,
        })
        .await
        .unwrap();
    db.create_hazard_type(&HazardType {
        id: 0,
        mnemonic: "EQ".to_string(),
        title: "Earthquake".to_string(),
        order: 2,
        ready: true,
    })
    .await
    .unwrap();
    db.create_hazard_type(&HazardType {
        id: 0,
        mnemonic: "DG".to_string(),
        title: "Water scarcity".to_string(),
        order: 3,
        ready: false,
    })
    .await
    .unwrap();

    let high = db
        .create_hazard_level(&HazardLevel {
            id: 0,
            mnemonic: "HIG".to_string(),
            title: "High".to_string(),
            order: 1,
        })
        .await
        .unwrap();

    let category = db
        .create_hazard_category(&HazardCategory {
            id: 0,
            hazard_type_id: fl.id,
            hazard_level_id: high.id,
            general_recommendation: Some("Build on stilts.".to_string()),
        })
        .await
        .unwrap();

    // country division with one child district
    db.create_division(&AdministrativeDivision {
        code: 31,
        leveltype_id: 1,
        name: "Testland".to_string(),
        parent_code: None,
        geom: Some(json!({ "type": "Point", "coordinates": [10.0, 20.0] })),
    })
    .await
    .unwrap();
    db.create_division(&AdministrativeDivision {
        code: 3101,
        leveltype_id: 2,
        name: "Testshire".to_string(),
        parent_code: Some(31),
        geom: None,
    })
    .await
    .unwrap();
    db.associate_category_division(31, category.id).await.unwrap();

    // a region-scoped further resource for FL
    db.create_region(&Region::new(RegionId(1), "Testland", 3))
        .await
        .unwrap();
    db.associate_region_division(RegionId(1), 31).await.unwrap();
    db.sync_document(
        &FurtherResource::new(42, "Flood handbook"),
        &[ResourceAssociation {
            hazard_type: "FL".to_string(),
            region_id: RegionId(1),
        }],
    )
    .await
    .unwrap();

    db
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.geonode.url = "https://geonode.example.org".to_string();
    config
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn overview_lists_ready_hazard_types_sorted_by_level() {
    let db = seeded_db().await;
    let app = create_app(db, test_config());

    let (status, body) = get_json(&app, "/report/31").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["division"]["code"], 31);
    assert_eq!(body["division"]["name"], "Testland");

    let hazards = body["hazards"].as_array().unwrap();
    // DG is not ready and must not appear
    assert_eq!(hazards.len(), 2);
    // FL has a level, EQ falls back to the no-data sentinel, sorted last
    assert_eq!(hazards[0]["hazardtype"]["mnemonic"], "FL");
    assert_eq!(hazards[0]["hazardlevel"]["mnemonic"], "HIG");
    assert_eq!(hazards[1]["hazardtype"]["mnemonic"], "EQ");
    assert_eq!(hazards[1]["hazardlevel"]["mnemonic"], "no-data");
}

#[tokio::test]
async fn overview_unknown_division_is_404() {
    let db = seeded_db().await;
    let app = create_app(db, test_config());

    let (status, _) = get_json(&app, "/report/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_report_includes_recommendation_and_resources() {
    let db = seeded_db().await;
    let app = create_app(db, test_config());

    let (status, body) = get_json(&app, "/report/31/FL").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["hazardlevel"]["mnemonic"], "HIG");
    assert_eq!(body["general_recommendation"], "Build on stilts.");

    let resources = body["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["text"], "Flood handbook");
    assert_eq!(
        resources[0]["url"],
        "https://geonode.example.org/documents/42"
    );
}

#[tokio::test]
async fn category_report_without_data_is_404() {
    let db = seeded_db().await;
    let app = create_app(db, test_config());

    let (status, _) = get_json(&app, "/report/31/EQ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn geojson_returns_division_and_children() {
    let db = seeded_db().await;
    let app = create_app(db, test_config());

    let (status, body) = get_json(&app, "/report/31/geojson").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["type"], "FeatureCollection");
    let features = body["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["properties"]["code"], 31);
    assert_eq!(features[0]["geometry"]["type"], "Point");
    assert_eq!(features[1]["properties"]["code"], 3101);
}

#[tokio::test]
async fn geojson_with_hazardtype_carries_levels() {
    let db = seeded_db().await;
    let app = create_app(db, test_config());

    let (status, body) = get_json(&app, "/report/31/geojson?hazardtype=FL").await;
    assert_eq!(status, StatusCode::OK);

    let features = body["features"].as_array().unwrap();
    assert_eq!(features[0]["properties"]["hazardLevelMnemonic"], "HIG");
    // the child has no category association, so no level properties
    assert!(features[1]["properties"].get("hazardLevelMnemonic").is_none());
}

#[tokio::test]
async fn data_source_returns_hazard_set_with_layers() {
    let db = seeded_db().await;

    let layer = Layer {
        id: LayerId(7),
        hazard_set: "TEST_GLOBAL".to_string(),
        hazard_type: "FL".to_string(),
        typename: Some("hazard:test".to_string()),
        title: "test layer".to_string(),
        srid: Some("EPSG:4326".to_string()),
        detail_url: None,
        download_url: None,
        owner_organization: None,
        data_update_date: None,
        metadata_update_date: None,
        calculation_method_quality: Some(5),
        scientific_quality: Some(5),
        hazard_period: Some(10),
        hazard_unit: Some("m".to_string()),
        return_period: Some(100),
    };
    db.sync_layer(&layer, true).await.unwrap();

    let app = create_app(db, test_config());

    let (status, body) = get_json(&app, "/data_source/TEST_GLOBAL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "TEST_GLOBAL");
    assert_eq!(body["complete"], false);
    let layers = body["layers"].as_array().unwrap();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0]["id"], 7);
}

#[tokio::test]
async fn data_source_unknown_hazard_set_is_400() {
    let db = seeded_db().await;
    let app = create_app(db, test_config());

    let (status, _) = get_json(&app, "/data_source/NOPE").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
