//! further resource type: an external document reference.

use serde::{Deserialize, Serialize};

/// a document reference harvested from the catalog, shown in reports as
/// additional reading for one or more hazard types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurtherResource {
    /// the catalog's document id.
    pub id: i64,

    /// display text (the document title).
    pub text: String,
}

impl FurtherResource {
    /// create a new further resource.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
