//! catalog region type.
//!
//! regions come from the remote catalog's region endpoint and scope
//! further resources to administrative divisions. region sync is
//! additive-only: rows are created once and never updated or deleted.

use serde::{Deserialize, Serialize};

/// unique identifier for a region (the catalog's id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub i64);

impl From<i64> for RegionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a catalog region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// unique identifier, assigned by the remote catalog.
    pub id: RegionId,

    /// english name of the region.
    pub name: String,

    /// hierarchical level (0 = world, higher = more specific).
    pub level: i32,
}

impl Region {
    /// create a new region.
    pub fn new(id: RegionId, name: impl Into<String>, level: i32) -> Self {
        Self {
            id,
            name: name.into(),
            level,
        }
    }
}
