//! hazatlas library - harvesting pipeline, http handlers and application setup.
//!
//! this crate provides the moving parts of the hazatlas service:
//! - [`catalog`]: geonode catalog client (list + detail fetches)
//! - [`harvester`]: change-detecting ingestion of catalog metadata
//! - [`handlers`]: http request handlers for the report endpoints
//! - [`cli`]: command-line interface implementation

#![warn(missing_docs)]

/// command-line interface implementation.
pub mod cli;
/// geonode catalog client.
pub mod catalog;
/// http request handlers for the report endpoints.
pub mod handlers;
/// catalog harvesting pipeline.
pub mod harvester;

pub use harvester::Harvester;

use axum::{Router, routing::get};
use hazatlas_db::HazatlasDb;
use hazatlas_types::Config;

/// shared state for http handlers.
#[derive(Clone)]
pub struct AppState {
    /// database connection for persistent storage.
    pub db: HazatlasDb,
    /// server configuration.
    pub config: Config,
}

/// create the axum application with all routes.
pub fn create_app(db: HazatlasDb, config: Config) -> Router {
    let state = AppState { db, config };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/report/{divisioncode}", get(handlers::report_overview))
        .route(
            "/report/{divisioncode}/geojson",
            get(handlers::report_geojson),
        )
        .route(
            "/report/{divisioncode}/{hazardtype}",
            get(handlers::report_category),
        )
        .route("/data_source/{hazardset}", get(handlers::data_source))
        .with_state(state)
}
