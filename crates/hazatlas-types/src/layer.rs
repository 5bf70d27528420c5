//! layer type representing a single geospatial hazard data product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// unique identifier for a layer (the catalog's id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub i64);

impl From<i64> for LayerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a geospatial data layer harvested from the remote catalog.
///
/// every layer belongs to exactly one hazard set, named by the
/// `hazard_set` key in the catalog metadata. the four
/// comparison-relevant fields (`data_update_date`,
/// `metadata_update_date`, `calculation_method_quality`,
/// `scientific_quality`) drive hazard-set invalidation; the rest are
/// descriptive only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// unique identifier, assigned by the remote catalog.
    pub id: LayerId,

    /// hazard-set key this layer belongs to (e.g. "FL-GLOBAL-GAR15").
    pub hazard_set: String,

    /// hazard-type mnemonic from the catalog metadata (e.g. "river_flood").
    pub hazard_type: String,

    /// geoserver typename (e.g. "hazard:adm2_fu_raster_v3").
    pub typename: Option<String>,

    /// layer title.
    pub title: String,

    /// spatial reference identifier (e.g. "EPSG:4326").
    pub srid: Option<String>,

    /// url of the catalog detail page.
    pub detail_url: Option<String>,

    /// url of the downloadable artifact.
    pub download_url: Option<String>,

    /// owning organization, from the catalog owner record.
    pub owner_organization: Option<String>,

    /// when the underlying data was last updated.
    pub data_update_date: Option<DateTime<Utc>>,

    /// when the catalog metadata was last updated.
    pub metadata_update_date: Option<DateTime<Utc>>,

    /// quality rating of the calculation method.
    pub calculation_method_quality: Option<i32>,

    /// scientific quality rating.
    pub scientific_quality: Option<i32>,

    /// hazard period in years.
    pub hazard_period: Option<i32>,

    /// unit of the hazard intensity values (e.g. "m").
    pub hazard_unit: Option<String>,

    /// return period in years, used to order layers within a hazard set.
    pub return_period: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_id_display() {
        assert_eq!(LayerId(42).to_string(), "42");
    }

    #[test]
    fn test_layer_serde_roundtrip() {
        let layer = Layer {
            id: LayerId(1),
            hazard_set: "TEST_GLOBAL".to_string(),
            hazard_type: "river_flood".to_string(),
            typename: Some("hazard:test".to_string()),
            title: "test layer".to_string(),
            srid: Some("EPSG:4326".to_string()),
            detail_url: None,
            download_url: Some("test.tif".to_string()),
            owner_organization: None,
            data_update_date: None,
            metadata_update_date: None,
            calculation_method_quality: Some(5),
            scientific_quality: Some(5),
            hazard_period: Some(10),
            hazard_unit: Some("m".to_string()),
            return_period: None,
        };

        let json = serde_json::to_string(&layer).unwrap();
        let parsed: Layer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, layer);
    }
}
