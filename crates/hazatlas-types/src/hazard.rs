//! hazard classification types.
//!
//! a hazard set groups the layers sharing one `hazard_set` catalog key and
//! carries the derived `complete`/`processed` status that downstream
//! processing maintains. hazard types, levels and categories are reference
//! data consumed by the report views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// a hazard type (flood, earthquake, ...), referenced by mnemonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardType {
    /// database id.
    pub id: i32,

    /// short mnemonic used in urls and catalog metadata (e.g. "FL").
    pub mnemonic: String,

    /// human-readable title.
    pub title: String,

    /// display order in report overviews.
    pub order: i32,

    /// whether this hazard type is ready to be shown in reports.
    pub ready: bool,
}

/// a hazard level (high, medium, low, very low).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardLevel {
    /// database id.
    pub id: i32,

    /// short mnemonic (e.g. "HIG").
    pub mnemonic: String,

    /// human-readable title.
    pub title: String,

    /// sort order, lower = more severe.
    pub order: i32,
}

/// a (hazard type, hazard level) category with its recommendation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardCategory {
    /// database id.
    pub id: i32,

    /// hazard type this category belongs to.
    pub hazard_type_id: i32,

    /// hazard level assigned by this category.
    pub hazard_level_id: i32,

    /// general recommendation text shown in reports.
    pub general_recommendation: Option<String>,
}

/// a hazard set: the logical grouping of layers sharing one catalog key.
///
/// `complete` and `processed` are derived state. they are reset (false /
/// None) whenever a comparison-relevant field of any owned layer changes,
/// atomically with the layer write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardSet {
    /// the `hazard_set` key shared by the owned layers.
    pub id: String,

    /// hazard-type mnemonic from the catalog metadata.
    pub hazard_type: String,

    /// whether downstream processing found the set complete.
    pub complete: bool,

    /// when downstream processing last ran, none if invalidated.
    pub processed: Option<DateTime<Utc>>,
}

impl HazardSet {
    /// create a new, not-yet-processed hazard set.
    pub fn new(id: impl Into<String>, hazard_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hazard_type: hazard_type.into(),
            complete: false,
            processed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hazard_set_is_unprocessed() {
        let hs = HazardSet::new("TEST_GLOBAL", "river_flood");
        assert!(!hs.complete);
        assert!(hs.processed.is_none());
    }
}
