//! integration tests for the harvesting pipeline
//!
//! drives the harvester against a mock geonode catalog and an in-memory
//! database, covering the change-detection and failure-isolation
//! contracts.

use chrono::Utc;
use serde_json::{Value, json};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

use hazatlas::Harvester;
use hazatlas::catalog::GeonodeClient;
use hazatlas_db::{Database, HazatlasDb};
use hazatlas_types::{GeonodeConfig, LayerId, Region, RegionId};

fn catalog_client(base_url: &str) -> GeonodeClient {
    GeonodeClient::new(&GeonodeConfig {
        url: base_url.to_string(),
        page_size: 50,
        timeout_secs: 5,
        api_token: None,
    })
    .expect("failed to build catalog client")
}

async fn setup(server: &MockServer) -> (Harvester<HazatlasDb>, HazatlasDb) {
    let db = HazatlasDb::new_in_memory()
        .await
        .expect("failed to create in-memory database");
    let harvester = Harvester::new(catalog_client(&server.uri()), db.clone());
    (harvester, db)
}

/// layer list summary matching the catalog's layer endpoint shape.
fn layer_summary() -> Value {
    json!({
        "id": 1,
        "csw_type": "dataset",
        "title": "test layer",
        "data_update_date": "2026-07-12T15:24:14.029130",
        "detail_url": "www.test.com",
        "download_url": "test.tif",
        "srid": "EPSG:4326"
    })
}

/// full layer detail with the given field overrides applied.
fn layer_detail(overrides: Value) -> Value {
    let mut detail = json!({
        "id": 1,
        "csw_type": "dataset",
        "title": "test layer",
        "data_update_date": "2026-07-12T15:24:14.029130",
        "detail_url": "www.test.com",
        "download_url": "test.tif",
        "srid": "EPSG:4326",
        "calculation_method_quality": 5,
        "hazard_period": 10,
        "hazard_unit": "m",
        "hazard_set": "TEST_GLOBAL",
        "hazard_type": "river_flood",
        "metadata_update_date": "2026-07-12T15:24:14.029130",
        "owner": { "organization": "" },
        "scientific_quality": 5
    });

    let map = detail.as_object_mut().unwrap();
    for (key, value) in overrides.as_object().unwrap() {
        map.insert(key.clone(), value.clone());
    }
    detail
}

async fn mount_layers_list(server: &MockServer) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/layers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [layer_summary()]
        })))
        .mount(server)
        .await;
}

/// mount a layer detail response that matches exactly once.
async fn mount_layer_detail_once(server: &MockServer, body: Value) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/layers/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

/// harvest twice with differing details, marking the hazard set processed
/// in between. returns the database for assertions.
async fn run_change_scenario(first_detail: Value, second_detail: Value) -> HazatlasDb {
    let server = MockServer::start().await;
    mount_layers_list(&server).await;
    mount_layer_detail_once(&server, first_detail).await;
    mount_layer_detail_once(&server, second_detail).await;

    let (harvester, db) = setup(&server).await;

    harvester.harvest_layers(None).await.unwrap();

    // downstream processing marks the set done between the two syncs
    db.set_hazard_set_status("TEST_GLOBAL", true, Some(Utc::now()))
        .await
        .unwrap();

    harvester.harvest_layers(None).await.unwrap();

    db
}

#[tokio::test]
async fn region_sync_adds_new_region_once() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/regions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{ "id": 1, "name_en": "Test region", "level": 3 }]
        })))
        .mount(&server)
        .await;

    let (harvester, db) = setup(&server).await;

    harvester.harvest_regions().await.unwrap();

    let regions = db.list_regions().await.unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0], Region::new(RegionId(1), "Test region", 3));

    // re-running with the same input creates no duplicate
    harvester.harvest_regions().await.unwrap();
    assert_eq!(db.list_regions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn region_sync_leaves_existing_regions_untouched() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/regions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{ "id": 1, "name_en": "Renamed region", "level": 2 }]
        })))
        .mount(&server)
        .await;

    let (harvester, db) = setup(&server).await;
    db.create_region(&Region::new(RegionId(1), "Test region", 3))
        .await
        .unwrap();

    harvester.harvest_regions().await.unwrap();

    // additive-only: no update-in-place
    let region = db.get_region(RegionId(1)).await.unwrap().unwrap();
    assert_eq!(region.name, "Test region");
    assert_eq!(region.level, 3);
}

#[tokio::test]
async fn valid_layer_creates_layer_and_hazard_set() {
    let server = MockServer::start().await;
    mount_layers_list(&server).await;
    mount_layer_detail_once(&server, layer_detail(json!({}))).await;

    let (harvester, db) = setup(&server).await;

    harvester.harvest_layers(None).await.unwrap();

    let layers = db.list_layers_for_hazard_set("TEST_GLOBAL").await.unwrap();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].id, LayerId(1));
    assert_eq!(layers[0].title, "test layer");

    // first-seen layer always leaves the set invalidated
    let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
    assert_eq!(hazard_set.hazard_type, "river_flood");
    assert!(!hazard_set.complete);
    assert!(hazard_set.processed.is_none());
}

#[tokio::test]
async fn data_update_date_change_resets_status() {
    let db = run_change_scenario(
        layer_detail(json!({ "data_update_date": "2026-07-11T15:24:14.029130" })),
        layer_detail(json!({ "data_update_date": "2026-07-12T15:24:14.029130" })),
    )
    .await;

    let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
    assert!(!hazard_set.complete);
    assert!(hazard_set.processed.is_none());
}

#[tokio::test]
async fn metadata_update_date_change_resets_status() {
    let db = run_change_scenario(
        layer_detail(json!({ "metadata_update_date": "2026-07-11T15:24:14.029130" })),
        layer_detail(json!({ "metadata_update_date": "2026-07-12T15:24:14.029130" })),
    )
    .await;

    let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
    assert!(!hazard_set.complete);
    assert!(hazard_set.processed.is_none());
}

#[tokio::test]
async fn calculation_method_quality_change_resets_status() {
    let db = run_change_scenario(
        layer_detail(json!({ "calculation_method_quality": 1 })),
        layer_detail(json!({ "calculation_method_quality": 2 })),
    )
    .await;

    let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
    assert!(!hazard_set.complete);
}

#[tokio::test]
async fn scientific_quality_change_resets_status() {
    let db = run_change_scenario(
        layer_detail(json!({ "scientific_quality": 1 })),
        layer_detail(json!({ "scientific_quality": 2 })),
    )
    .await;

    let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
    assert!(!hazard_set.complete);
}

#[tokio::test]
async fn identical_resync_preserves_status() {
    let db = run_change_scenario(layer_detail(json!({})), layer_detail(json!({}))).await;

    // no spurious invalidation on a no-op re-harvest
    let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
    assert!(hazard_set.complete);
    assert!(hazard_set.processed.is_some());
}

#[tokio::test]
async fn descriptive_change_preserves_status() {
    let db = run_change_scenario(
        layer_detail(json!({})),
        layer_detail(json!({
            "title": "renamed layer",
            "download_url": "other.tif",
            "typename": "hazard:other"
        })),
    )
    .await;

    let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
    assert!(hazard_set.complete);

    // the descriptive fields themselves were still overwritten
    let layer = db.get_layer(LayerId(1)).await.unwrap().unwrap();
    assert_eq!(layer.title, "renamed layer");
    assert_eq!(layer.download_url.as_deref(), Some("other.tif"));
}

#[tokio::test]
async fn detail_fetch_500_aborts_without_corrupting_data() {
    let server = MockServer::start().await;
    mount_layer_detail_once(
        &server,
        layer_detail(json!({ "typename": "hazard:adm2_fu_raster_v3" })),
    )
    .await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/layers/1/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"error_message": "Some error."}"#),
        )
        .mount(&server)
        .await;

    let (harvester, db) = setup(&server).await;
    let summary = layer_summary().as_object().unwrap().clone();

    // first record commits
    harvester.harvest_layer(&summary).await.unwrap();

    // second fetch fails with the verbatim status and body
    let err = harvester.harvest_layer(&summary).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"geonode returned status 500: {"error_message": "Some error."}"#
    );

    // the committed layer is intact
    let layer = db.get_layer(LayerId(1)).await.unwrap().unwrap();
    assert_eq!(layer.typename.as_deref(), Some("hazard:adm2_fu_raster_v3"));
}

#[tokio::test]
async fn valid_document_creates_further_resource() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{ "id": 1, "title": "Test document", "supplemental_information": "" }]
        })))
        .mount(&server)
        .await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/documents/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "csw_type": "document",
            "hazard_type": "earthquake",
            "regions": [],
            "supplemental_information": "",
            "title": "Test document"
        })))
        .mount(&server)
        .await;

    let (harvester, db) = setup(&server).await;

    harvester.harvest_documents().await.unwrap();

    let resources = db.list_further_resources().await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].text, "Test document");
    assert!(db.list_resource_associations(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn document_resync_replaces_association_set() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{ "id": 1, "title": "Test document" }]
        })))
        .mount(&server)
        .await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/documents/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Test document",
            "hazard_type": "earthquake",
            "regions": ["World", "Test region"]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/documents/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Test document",
            "hazard_type": "earthquake",
            "regions": ["Test region"]
        })))
        .mount(&server)
        .await;

    let (harvester, db) = setup(&server).await;
    db.create_region(&Region::new(RegionId(1), "World", 0))
        .await
        .unwrap();
    db.create_region(&Region::new(RegionId(2), "Test region", 3))
        .await
        .unwrap();

    harvester.harvest_documents().await.unwrap();
    assert_eq!(db.list_resource_associations(1).await.unwrap().len(), 2);

    // the world association disappeared from the detail and must be removed
    harvester.harvest_documents().await.unwrap();
    let associations = db.list_resource_associations(1).await.unwrap();
    assert_eq!(associations.len(), 1);
    assert_eq!(associations[0].region_id, RegionId(2));
}

#[tokio::test]
async fn execute_runs_full_pass() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/regions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{ "id": 1, "name_en": "Test region", "level": 3 }]
        })))
        .mount(&server)
        .await;
    mount_layers_list(&server).await;
    mount_layer_detail_once(&server, layer_detail(json!({}))).await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "objects": [] })))
        .mount(&server)
        .await;

    let (harvester, db) = setup(&server).await;

    harvester.execute(None, false).await.unwrap();

    assert_eq!(db.list_regions().await.unwrap().len(), 1);
    assert!(db.get_layer(LayerId(1)).await.unwrap().is_some());
}

#[tokio::test]
async fn execute_in_force_mode_with_empty_catalog() {
    let server = MockServer::start().await;
    for path in ["/api/regions/", "/api/layers/", "/api/documents/"] {
        Mock::given(matchers::method("GET"))
            .and(matchers::path(path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "objects": [] })))
            .mount(&server)
            .await;
    }

    let (harvester, _db) = setup(&server).await;
    harvester.execute(None, true).await.unwrap();
}
