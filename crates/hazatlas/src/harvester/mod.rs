//! catalog harvesting pipeline.
//!
//! pulls region, layer and document metadata from the geonode catalog
//! into storage, one record at a time. each record commits its own
//! transaction, so a remote failure mid-pass aborts the pass but never
//! corrupts previously committed records.

pub mod change_impact;

use tracing::{debug, info, warn};

use hazatlas_db::{Database, ResourceAssociation};
use hazatlas_types::{FurtherResource, Region, RegionId};

use crate::catalog::{CatalogError, DocumentDetail, GeonodeClient, Record, RegionRecord};

/// errors from a harvest pass.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    /// catalog fetch or decode failure
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// storage failure
    #[error(transparent)]
    Database(#[from] hazatlas_db::Error),
}

/// result type for harvest operations.
pub type Result<T> = std::result::Result<T, HarvestError>;

/// the harvester: pulls catalog metadata into storage.
///
/// constructed explicitly from a client and a database handle; there is
/// no ambient configuration.
pub struct Harvester<D> {
    client: GeonodeClient,
    db: D,
}

impl<D: Database> Harvester<D> {
    /// create a new harvester.
    pub fn new(client: GeonodeClient, db: D) -> Self {
        Self { client, db }
    }

    /// run a full harvest pass: regions, then layers, then documents.
    ///
    /// `hazard_type` restricts the layer sync to one hazard type.
    /// `force` re-processes every record even if unchanged; it does not
    /// change the invalidation contract.
    pub async fn execute(&self, hazard_type: Option<&str>, force: bool) -> Result<()> {
        if force {
            info!("force mode: re-processing all records");
        }

        self.harvest_regions().await?;
        self.harvest_layers(hazard_type).await?;
        self.harvest_documents().await?;
        Ok(())
    }

    /// sync regions: insert unknown ones, leave existing ones untouched.
    pub async fn harvest_regions(&self) -> Result<()> {
        let records = self.client.list("regions", None).await?;
        info!(count = records.len(), "fetched region records");

        for record in records {
            let region: RegionRecord =
                serde_json::from_value(serde_json::Value::Object(record))
                    .map_err(|e| CatalogError::Decode(format!("region record: {}", e)))?;

            if self.db.get_region(RegionId(region.id)).await?.is_none() {
                debug!(id = region.id, name = %region.name_en, "adding region");
                self.db
                    .create_region(&Region::new(
                        RegionId(region.id),
                        region.name_en,
                        region.level,
                    ))
                    .await?;
            }
        }

        Ok(())
    }

    /// sync layers, optionally restricted to one hazard type.
    pub async fn harvest_layers(&self, hazard_type: Option<&str>) -> Result<()> {
        let filter = hazard_type.map(|ht| ("hazard_type", ht));
        let summaries = self.client.list("layers", filter).await?;
        info!(count = summaries.len(), "fetched layer summaries");

        for summary in &summaries {
            self.harvest_layer(summary).await?;
        }

        Ok(())
    }

    /// sync one layer from its list summary.
    ///
    /// fetches the full detail first, then writes the layer and its
    /// hazard-set status in a single transaction. nothing is written if
    /// the detail fetch fails.
    pub async fn harvest_layer(&self, summary: &Record) -> Result<()> {
        let id = record_id(summary, "layer")?;

        let detail = self.client.layer_detail(id).await?;
        let new_layer = detail.into_layer()?;

        let existing = self.db.get_layer(new_layer.id).await?;
        let invalidate = change_impact::invalidates(existing.as_ref(), &new_layer);
        if invalidate {
            info!(
                layer = %new_layer.id,
                hazard_set = %new_layer.hazard_set,
                "layer changed, resetting hazard-set status"
            );
        }

        self.db.sync_layer(&new_layer, invalidate).await?;
        Ok(())
    }

    /// sync documents into further resources.
    pub async fn harvest_documents(&self) -> Result<()> {
        let summaries = self.client.list("documents", None).await?;
        info!(count = summaries.len(), "fetched document summaries");

        for summary in &summaries {
            self.harvest_document(summary).await?;
        }

        Ok(())
    }

    /// sync one document from its list summary.
    ///
    /// fetches the full detail first, then writes the further resource
    /// and its full association set in a single transaction.
    pub async fn harvest_document(&self, summary: &Record) -> Result<()> {
        let id = record_id(summary, "document")?;

        let detail = self.client.document_detail(id).await?;
        let resource = FurtherResource::new(detail.id, detail.title.clone());
        let associations = self.resolve_associations(&detail).await?;

        self.db.sync_document(&resource, &associations).await?;
        Ok(())
    }

    /// resolve a document's hazard type and regions into association pairs.
    ///
    /// regions arrive as names or ids; unresolvable ones are skipped,
    /// since region sync is the source of truth for regions.
    async fn resolve_associations(
        &self,
        detail: &DocumentDetail,
    ) -> Result<Vec<ResourceAssociation>> {
        let Some(hazard_type) = detail.hazard_type.as_deref().filter(|s| !s.is_empty()) else {
            return Ok(Vec::new());
        };

        let regions = self.db.list_regions().await?;
        let mut associations = Vec::new();

        for value in &detail.regions {
            let resolved = match value {
                serde_json::Value::Number(n) => n
                    .as_i64()
                    .and_then(|id| regions.iter().find(|r| r.id.0 == id)),
                serde_json::Value::String(name) => regions.iter().find(|r| r.name == *name),
                _ => None,
            };

            match resolved {
                Some(region) => associations.push(ResourceAssociation {
                    hazard_type: hazard_type.to_string(),
                    region_id: region.id,
                }),
                None => warn!(document = detail.id, region = %value, "unknown region, skipping association"),
            }
        }

        Ok(associations)
    }
}

/// extract the required `id` field from a list record.
fn record_id(record: &Record, kind: &str) -> Result<i64> {
    record
        .get("id")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| CatalogError::Decode(format!("{} summary missing id", kind)).into())
}
