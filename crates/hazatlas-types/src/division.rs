//! administrative division type served by the report views.

use serde::{Deserialize, Serialize};

/// an administrative division (country, province, district).
///
/// divisions come from a separate import pipeline, not from harvesting;
/// the report views read them and never write them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdministrativeDivision {
    /// division code (unique across all levels).
    pub code: i64,

    /// level type: 1 = country, 2 = province, 3 = district.
    pub leveltype_id: i32,

    /// division name.
    pub name: String,

    /// code of the parent division, none at country level.
    pub parent_code: Option<i64>,

    /// division geometry as a geojson geometry object, stored verbatim.
    pub geom: Option<serde_json::Value>,
}
