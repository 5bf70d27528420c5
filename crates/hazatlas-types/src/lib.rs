//! core types for hazatlas - a hazard-data catalog harvester and report service.
//!
//! this crate provides the fundamental data structures used throughout hazatlas:
//! - [`layer`]: a geospatial hazard data product with quality/temporal metadata
//! - [`hazard`]: hazard types, levels, categories and hazard sets
//! - [`region`]: catalog regions used to scope further resources
//! - [`division`]: administrative divisions served by the report views
//! - [`config`]: application configuration

mod config;
mod division;
mod hazard;
mod layer;
mod region;
mod resource;

pub use config::{Config, DatabaseConfig, GeonodeConfig};
pub use division::AdministrativeDivision;
pub use hazard::{HazardCategory, HazardLevel, HazardSet, HazardType};
pub use layer::{Layer, LayerId};
pub use region::{Region, RegionId};
pub use resource::FurtherResource;
