//! database layer for hazatlas.
//!
//! this crate provides persistent storage for:
//! - Regions
//! - Layers and HazardSets
//! - FurtherResources and their hazard-type associations
//! - AdministrativeDivisions and hazard categories (report views)
//!
//! the harvesting write paths (`sync_layer`, `sync_document`) are
//! transactional: a layer and its hazard-set status always commit
//! together, and a document and its association set always commit
//! together.

#![warn(missing_docs)]

mod entity;
mod error;
mod migration;

pub use error::Error;

use std::future::Future;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Database as SeaOrmDatabase,
    DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use sea_orm_migration::MigratorTrait;

use hazatlas_types::{
    AdministrativeDivision, Config, FurtherResource, HazardCategory, HazardLevel, HazardSet,
    HazardType, Layer, LayerId, Region, RegionId,
};

/// result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// a (hazard type, region) pair a further resource is associated with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceAssociation {
    /// hazard-type mnemonic from the document metadata.
    pub hazard_type: String,
    /// region the association is scoped to.
    pub region_id: RegionId,
}

/// resolved report category for one (division, hazard type) pair.
#[derive(Clone, Debug)]
pub struct CategoryInfo {
    /// the hazard type.
    pub hazard_type: HazardType,
    /// the hazard level assigned to the division.
    pub hazard_level: HazardLevel,
    /// general recommendation text, if any.
    pub general_recommendation: Option<String>,
}

/// database trait for hazatlas storage operations.
///
/// this trait abstracts over different database backends (sqlite,
/// postgresql). harvesting writes go through `sync_layer` and
/// `sync_document`; everything else is plain reads plus the reference-data
/// setters used by imports and tests.
pub trait Database: Send + Sync {
    // ─── Health Check ─────────────────────────────────────────────────────────

    /// ping the database to verify connectivity.
    fn ping(&self) -> impl Future<Output = Result<()>> + Send;

    // ─── Region Operations ───────────────────────────────────────────────────

    /// insert a new region. region sync is additive-only.
    fn create_region(&self, region: &Region) -> impl Future<Output = Result<Region>> + Send;

    /// get a region by id. returns `None` if not found.
    fn get_region(&self, id: RegionId) -> impl Future<Output = Result<Option<Region>>> + Send;

    /// list all regions.
    fn list_regions(&self) -> impl Future<Output = Result<Vec<Region>>> + Send;

    // ─── Hazard Reference Data ───────────────────────────────────────────────

    /// create a hazard type. returns the created row with its assigned id.
    fn create_hazard_type(
        &self,
        hazard_type: &HazardType,
    ) -> impl Future<Output = Result<HazardType>> + Send;

    /// get a hazard type by its mnemonic.
    fn get_hazard_type(
        &self,
        mnemonic: &str,
    ) -> impl Future<Output = Result<Option<HazardType>>> + Send;

    /// list all hazard types ordered by sort order.
    fn list_hazard_types(&self) -> impl Future<Output = Result<Vec<HazardType>>> + Send;

    /// create a hazard level. returns the created row with its assigned id.
    fn create_hazard_level(
        &self,
        level: &HazardLevel,
    ) -> impl Future<Output = Result<HazardLevel>> + Send;

    /// create a hazard category. returns the created row with its assigned id.
    fn create_hazard_category(
        &self,
        category: &HazardCategory,
    ) -> impl Future<Output = Result<HazardCategory>> + Send;

    // ─── Hazard Set / Layer Operations ───────────────────────────────────────

    /// get a hazard set by its key. returns `None` if not found.
    fn get_hazard_set(&self, id: &str) -> impl Future<Output = Result<Option<HazardSet>>> + Send;

    /// set the derived processing status of a hazard set.
    ///
    /// used by the downstream processor when it finishes a set; tests use it
    /// to arrange pre-sync state.
    fn set_hazard_set_status(
        &self,
        id: &str,
        complete: bool,
        processed: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// get a layer by id. returns `None` if not found.
    fn get_layer(&self, id: LayerId) -> impl Future<Output = Result<Option<Layer>>> + Send;

    /// list the layers of a hazard set, ordered by return period.
    fn list_layers_for_hazard_set(
        &self,
        hazardset_id: &str,
    ) -> impl Future<Output = Result<Vec<Layer>>> + Send;

    /// upsert a layer together with its hazard-set status, in one transaction.
    ///
    /// the owning hazard set (and its hazard type) are created if absent.
    /// when `invalidate` is true the hazard set's `complete` flag is reset
    /// and `processed` cleared in the same transaction, before commit, so no
    /// reader ever observes a layer update without the matching status reset.
    fn sync_layer(
        &self,
        layer: &Layer,
        invalidate: bool,
    ) -> impl Future<Output = Result<()>> + Send;

    // ─── Further Resource Operations ─────────────────────────────────────────

    /// get a further resource by id. returns `None` if not found.
    fn get_further_resource(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<FurtherResource>>> + Send;

    /// list all further resources.
    fn list_further_resources(&self) -> impl Future<Output = Result<Vec<FurtherResource>>> + Send;

    /// upsert a further resource and replace its association set, in one
    /// transaction.
    ///
    /// associations no longer present in `associations` are removed; new
    /// ones are added. hazard types named by mnemonic are created if absent.
    fn sync_document(
        &self,
        resource: &FurtherResource,
        associations: &[ResourceAssociation],
    ) -> impl Future<Output = Result<()>> + Send;

    /// list the (hazard_type mnemonic, region) associations of a resource.
    fn list_resource_associations(
        &self,
        resource_id: i64,
    ) -> impl Future<Output = Result<Vec<ResourceAssociation>>> + Send;

    // ─── Report Queries ──────────────────────────────────────────────────────

    /// insert an administrative division.
    fn create_division(
        &self,
        division: &AdministrativeDivision,
    ) -> impl Future<Output = Result<()>> + Send;

    /// get an administrative division by code.
    fn get_division(
        &self,
        code: i64,
    ) -> impl Future<Output = Result<Option<AdministrativeDivision>>> + Send;

    /// list the direct children of a division.
    fn list_child_divisions(
        &self,
        code: i64,
    ) -> impl Future<Output = Result<Vec<AdministrativeDivision>>> + Send;

    /// associate a hazard category with a division.
    fn associate_category_division(
        &self,
        division_code: i64,
        category_id: i32,
    ) -> impl Future<Output = Result<()>> + Send;

    /// associate a catalog region with a division.
    fn associate_region_division(
        &self,
        region_id: RegionId,
        division_code: i64,
    ) -> impl Future<Output = Result<()>> + Send;

    /// resolve the report category for a (division, hazard type) pair.
    fn get_category_info(
        &self,
        division_code: i64,
        hazard_type: &str,
    ) -> impl Future<Output = Result<Option<CategoryInfo>>> + Send;

    /// list the further resources relevant to a (division, hazard type)
    /// pair, most specific region first.
    fn list_further_resources_for(
        &self,
        division_code: i64,
        hazard_type: &str,
    ) -> impl Future<Output = Result<Vec<FurtherResource>>> + Send;
}

/// the main database implementation using sea-orm.
#[derive(Clone)]
pub struct HazatlasDb {
    conn: DatabaseConnection,
}

impl HazatlasDb {
    /// create a new database connection from config.
    pub async fn new(config: &Config) -> Result<Self> {
        let url = Self::build_connection_url(&config.database)?;
        let conn: DatabaseConnection = SeaOrmDatabase::connect(&url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let db = Self { conn };

        // enable WAL mode for file-backed sqlite databases
        if config.database.db_type == "sqlite" {
            db.enable_wal_mode().await?;
        }

        db.migrate().await?;
        Ok(db)
    }

    /// enable write-ahead logging mode for sqlite.
    async fn enable_wal_mode(&self) -> Result<()> {
        self.conn
            .execute_unprepared("PRAGMA journal_mode=WAL")
            .await
            .map_err(|e| Error::Connection(format!("failed to enable WAL mode: {}", e)))?;
        tracing::debug!("sqlite WAL mode enabled");
        Ok(())
    }

    /// build a sea-orm compatible connection url from config.
    fn build_connection_url(config: &hazatlas_types::DatabaseConfig) -> Result<String> {
        match config.db_type.as_str() {
            "sqlite" => {
                let path = if config.connection_string.starts_with("sqlite:") {
                    config.connection_string.clone()
                } else {
                    format!("sqlite:{}", config.connection_string)
                };
                // add ?mode=rwc to create the file if it doesn't exist
                if path.contains('?') {
                    Ok(path)
                } else {
                    Ok(format!("{}?mode=rwc", path))
                }
            }
            "postgres" | "postgresql" => Ok(config.connection_string.clone()),
            other => Err(Error::InvalidData(format!(
                "unsupported database type: {}",
                other
            ))),
        }
    }

    /// create an in-memory sqlite database for testing.
    pub async fn new_in_memory() -> Result<Self> {
        let conn: DatabaseConnection = SeaOrmDatabase::connect("sqlite::memory:")
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let db = Self { conn };
        db.migrate().await?;
        Ok(db)
    }

    /// run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        migration::Migrator::up(&self.conn, None)
            .await
            .map_err(|e| Error::Migration(e.to_string()))?;
        Ok(())
    }
}

/// find a hazard type by mnemonic, creating it if absent.
///
/// generic over the connection so it can run inside a transaction.
async fn get_or_create_hazard_type<C: ConnectionTrait>(
    conn: &C,
    mnemonic: &str,
) -> Result<entity::hazard_type::Model> {
    if let Some(existing) = entity::hazard_type::Entity::find()
        .filter(entity::hazard_type::Column::Mnemonic.eq(mnemonic))
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let ht = HazardType {
        id: 0,
        mnemonic: mnemonic.to_string(),
        title: mnemonic.to_string(),
        order: 0,
        ready: true,
    };
    let model: entity::hazard_type::ActiveModel = (&ht).into();
    Ok(model.insert(conn).await?)
}

/// find a hazard set by key, creating it if absent.
async fn get_or_create_hazard_set<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    hazard_type_id: i32,
) -> Result<entity::hazard_set::Model> {
    if let Some(existing) = entity::hazard_set::Entity::find_by_id(id.to_string())
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let model = entity::hazard_set::ActiveModel::for_new(id, hazard_type_id);
    Ok(model.insert(conn).await?)
}

impl Database for HazatlasDb {
    // health check

    async fn ping(&self) -> Result<()> {
        self.conn
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(())
    }

    // region operations

    async fn create_region(&self, region: &Region) -> Result<Region> {
        let model: entity::region::ActiveModel = region.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_region(&self, id: RegionId) -> Result<Option<Region>> {
        let result = entity::region::Entity::find_by_id(id.0)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_regions(&self) -> Result<Vec<Region>> {
        let results = entity::region::Entity::find().all(&self.conn).await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    // hazard reference data

    async fn create_hazard_type(&self, hazard_type: &HazardType) -> Result<HazardType> {
        let model: entity::hazard_type::ActiveModel = hazard_type.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_hazard_type(&self, mnemonic: &str) -> Result<Option<HazardType>> {
        let result = entity::hazard_type::Entity::find()
            .filter(entity::hazard_type::Column::Mnemonic.eq(mnemonic))
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_hazard_types(&self) -> Result<Vec<HazardType>> {
        let results = entity::hazard_type::Entity::find()
            .order_by_asc(entity::hazard_type::Column::SortOrder)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn create_hazard_level(&self, level: &HazardLevel) -> Result<HazardLevel> {
        let model: entity::hazard_level::ActiveModel = level.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn create_hazard_category(&self, category: &HazardCategory) -> Result<HazardCategory> {
        let model: entity::hazard_category::ActiveModel = category.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    // hazard set / layer operations

    async fn get_hazard_set(&self, id: &str) -> Result<Option<HazardSet>> {
        let result = entity::hazard_set::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await?;

        let Some(model) = result else {
            return Ok(None);
        };

        let hazard_type = entity::hazard_type::Entity::find_by_id(model.hazard_type_id)
            .one(&self.conn)
            .await?
            .map(|ht| ht.mnemonic)
            .unwrap_or_default();

        Ok(Some(model.into_hazard_set(hazard_type)))
    }

    async fn set_hazard_set_status(
        &self,
        id: &str,
        complete: bool,
        processed: Option<DateTime<Utc>>,
    ) -> Result<()> {
        entity::hazard_set::Entity::update_many()
            .col_expr(
                entity::hazard_set::Column::Complete,
                sea_orm::sea_query::Expr::value(complete),
            )
            .col_expr(
                entity::hazard_set::Column::Processed,
                sea_orm::sea_query::Expr::value(processed),
            )
            .filter(entity::hazard_set::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    async fn get_layer(&self, id: LayerId) -> Result<Option<Layer>> {
        let result = entity::layer::Entity::find_by_id(id.0)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_layers_for_hazard_set(&self, hazardset_id: &str) -> Result<Vec<Layer>> {
        let results = entity::layer::Entity::find()
            .filter(entity::layer::Column::HazardsetId.eq(hazardset_id))
            .order_by_asc(entity::layer::Column::ReturnPeriod)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn sync_layer(&self, layer: &Layer, invalidate: bool) -> Result<()> {
        let txn = self.conn.begin().await?;

        let hazard_type = get_or_create_hazard_type(&txn, &layer.hazard_type).await?;
        let hazard_set = get_or_create_hazard_set(&txn, &layer.hazard_set, hazard_type.id).await?;

        if invalidate {
            let mut model = hazard_set.into_active_model();
            model.complete = Set(false);
            model.processed = Set(None);
            model.update(&txn).await?;
        }

        let existing = entity::layer::Entity::find_by_id(layer.id.0).one(&txn).await?;
        let model: entity::layer::ActiveModel = layer.into();
        if existing.is_some() {
            model.update(&txn).await?;
        } else {
            model.insert(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    // further resource operations

    async fn get_further_resource(&self, id: i64) -> Result<Option<FurtherResource>> {
        let result = entity::further_resource::Entity::find_by_id(id)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_further_resources(&self) -> Result<Vec<FurtherResource>> {
        let results = entity::further_resource::Entity::find()
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn sync_document(
        &self,
        resource: &FurtherResource,
        associations: &[ResourceAssociation],
    ) -> Result<()> {
        let txn = self.conn.begin().await?;

        let existing = entity::further_resource::Entity::find_by_id(resource.id)
            .one(&txn)
            .await?;
        let model: entity::further_resource::ActiveModel = resource.into();
        if existing.is_some() {
            model.update(&txn).await?;
        } else {
            model.insert(&txn).await?;
        }

        // full replacement of the association set
        entity::hazardtype_furtherresource::Entity::delete_many()
            .filter(
                entity::hazardtype_furtherresource::Column::FurtherresourceId.eq(resource.id),
            )
            .exec(&txn)
            .await?;

        for assoc in associations {
            let hazard_type = get_or_create_hazard_type(&txn, &assoc.hazard_type).await?;
            entity::hazardtype_furtherresource::ActiveModel::for_new(
                hazard_type.id,
                resource.id,
                assoc.region_id.0,
            )
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn list_resource_associations(
        &self,
        resource_id: i64,
    ) -> Result<Vec<ResourceAssociation>> {
        let rows = entity::hazardtype_furtherresource::Entity::find()
            .filter(entity::hazardtype_furtherresource::Column::FurtherresourceId.eq(resource_id))
            .find_also_related(entity::hazard_type::Entity)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(row, hazard_type)| ResourceAssociation {
                hazard_type: hazard_type.map(|ht| ht.mnemonic).unwrap_or_default(),
                region_id: RegionId(row.region_id),
            })
            .collect())
    }

    // report queries

    async fn create_division(&self, division: &AdministrativeDivision) -> Result<()> {
        let model: entity::administrative_division::ActiveModel = division.into();
        model.insert(&self.conn).await?;
        Ok(())
    }

    async fn get_division(&self, code: i64) -> Result<Option<AdministrativeDivision>> {
        let result = entity::administrative_division::Entity::find_by_id(code)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_child_divisions(&self, code: i64) -> Result<Vec<AdministrativeDivision>> {
        let results = entity::administrative_division::Entity::find()
            .filter(entity::administrative_division::Column::ParentCode.eq(code))
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn associate_category_division(
        &self,
        division_code: i64,
        category_id: i32,
    ) -> Result<()> {
        entity::hazardcategory_admdiv::ActiveModel::for_new(division_code, category_id)
            .insert(&self.conn)
            .await?;
        Ok(())
    }

    async fn associate_region_division(
        &self,
        region_id: RegionId,
        division_code: i64,
    ) -> Result<()> {
        entity::region_admdiv::ActiveModel::for_new(region_id.0, division_code)
            .insert(&self.conn)
            .await?;
        Ok(())
    }

    async fn get_category_info(
        &self,
        division_code: i64,
        hazard_type: &str,
    ) -> Result<Option<CategoryInfo>> {
        let Some(ht) = entity::hazard_type::Entity::find()
            .filter(entity::hazard_type::Column::Mnemonic.eq(hazard_type))
            .one(&self.conn)
            .await?
        else {
            return Ok(None);
        };

        let categories = entity::hazard_category::Entity::find()
            .filter(entity::hazard_category::Column::HazardTypeId.eq(ht.id))
            .all(&self.conn)
            .await?;
        if categories.is_empty() {
            return Ok(None);
        }
        let category_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();

        let Some(assoc) = entity::hazardcategory_admdiv::Entity::find()
            .filter(
                entity::hazardcategory_admdiv::Column::AdministrativedivisionCode
                    .eq(division_code),
            )
            .filter(entity::hazardcategory_admdiv::Column::HazardcategoryId.is_in(category_ids))
            .one(&self.conn)
            .await?
        else {
            return Ok(None);
        };

        let category = categories
            .into_iter()
            .find(|c| c.id == assoc.hazardcategory_id)
            .ok_or_else(|| Error::NotFound(format!("hazard category {}", assoc.hazardcategory_id)))?;

        let level = entity::hazard_level::Entity::find_by_id(category.hazard_level_id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| Error::NotFound(format!("hazard level {}", category.hazard_level_id)))?;

        Ok(Some(CategoryInfo {
            hazard_type: ht.into(),
            hazard_level: level.into(),
            general_recommendation: category.general_recommendation,
        }))
    }

    async fn list_further_resources_for(
        &self,
        division_code: i64,
        hazard_type: &str,
    ) -> Result<Vec<FurtherResource>> {
        let Some(ht) = entity::hazard_type::Entity::find()
            .filter(entity::hazard_type::Column::Mnemonic.eq(hazard_type))
            .one(&self.conn)
            .await?
        else {
            return Ok(Vec::new());
        };

        let region_ids: Vec<i64> = entity::region_admdiv::Entity::find()
            .filter(entity::region_admdiv::Column::AdministrativedivisionCode.eq(division_code))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|row| row.region_id)
            .collect();
        if region_ids.is_empty() {
            return Ok(Vec::new());
        }

        let regions = entity::region::Entity::find()
            .filter(entity::region::Column::Id.is_in(region_ids.clone()))
            .all(&self.conn)
            .await?;
        let level_of = |region_id: i64| {
            regions
                .iter()
                .find(|r| r.id == region_id)
                .map(|r| r.level)
                .unwrap_or(0)
        };

        let mut assocs = entity::hazardtype_furtherresource::Entity::find()
            .filter(entity::hazardtype_furtherresource::Column::HazardTypeId.eq(ht.id))
            .filter(entity::hazardtype_furtherresource::Column::RegionId.is_in(region_ids))
            .all(&self.conn)
            .await?;

        // most specific region (deepest level) first
        assocs.sort_by_key(|a| std::cmp::Reverse(level_of(a.region_id)));

        let mut seen = Vec::new();
        for assoc in &assocs {
            if !seen.contains(&assoc.furtherresource_id) {
                seen.push(assoc.furtherresource_id);
            }
        }

        let resources = entity::further_resource::Entity::find()
            .filter(entity::further_resource::Column::Id.is_in(seen.clone()))
            .all(&self.conn)
            .await?;

        // preserve the region-level ordering computed above
        Ok(seen
            .into_iter()
            .filter_map(|id| {
                resources
                    .iter()
                    .find(|r| r.id == id)
                    .cloned()
                    .map(Into::into)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_db() -> HazatlasDb {
        HazatlasDb::new_in_memory().await.unwrap()
    }

    fn test_layer(id: i64) -> Layer {
        Layer {
            id: LayerId(id),
            hazard_set: "TEST_GLOBAL".to_string(),
            hazard_type: "river_flood".to_string(),
            typename: Some("hazard:test".to_string()),
            title: "test layer".to_string(),
            srid: Some("EPSG:4326".to_string()),
            detail_url: Some("www.test.com".to_string()),
            download_url: Some("test.tif".to_string()),
            owner_organization: None,
            data_update_date: None,
            metadata_update_date: None,
            calculation_method_quality: Some(5),
            scientific_quality: Some(5),
            hazard_period: Some(10),
            hazard_unit: Some("m".to_string()),
            return_period: None,
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let db = setup_test_db().await;
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_region_create_and_get() {
        let db = setup_test_db().await;

        let region = Region::new(RegionId(1), "Test region", 3);
        let created = db.create_region(&region).await.unwrap();
        assert_eq!(created, region);

        let fetched = db.get_region(RegionId(1)).await.unwrap();
        assert_eq!(fetched, Some(region));

        assert!(db.get_region(RegionId(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sync_layer_creates_set_and_layer() {
        let db = setup_test_db().await;

        db.sync_layer(&test_layer(1), true).await.unwrap();

        let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
        assert_eq!(hazard_set.hazard_type, "river_flood");
        assert!(!hazard_set.complete);
        assert!(hazard_set.processed.is_none());

        let layer = db.get_layer(LayerId(1)).await.unwrap().unwrap();
        assert_eq!(layer.hazard_set, "TEST_GLOBAL");
        assert_eq!(layer.title, "test layer");
    }

    #[tokio::test]
    async fn test_sync_layer_invalidation_resets_status() {
        let db = setup_test_db().await;

        db.sync_layer(&test_layer(1), true).await.unwrap();
        db.set_hazard_set_status("TEST_GLOBAL", true, Some(Utc::now()))
            .await
            .unwrap();

        // no invalidation: status is preserved
        db.sync_layer(&test_layer(1), false).await.unwrap();
        let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
        assert!(hazard_set.complete);
        assert!(hazard_set.processed.is_some());

        // invalidation: status is reset
        db.sync_layer(&test_layer(1), true).await.unwrap();
        let hazard_set = db.get_hazard_set("TEST_GLOBAL").await.unwrap().unwrap();
        assert!(!hazard_set.complete);
        assert!(hazard_set.processed.is_none());
    }

    #[tokio::test]
    async fn test_sync_layer_updates_in_place() {
        let db = setup_test_db().await;

        db.sync_layer(&test_layer(1), true).await.unwrap();

        let mut updated = test_layer(1);
        updated.title = "renamed layer".to_string();
        db.sync_layer(&updated, false).await.unwrap();

        let layer = db.get_layer(LayerId(1)).await.unwrap().unwrap();
        assert_eq!(layer.title, "renamed layer");

        // still exactly one layer in the set
        let layers = db.list_layers_for_hazard_set("TEST_GLOBAL").await.unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[tokio::test]
    async fn test_layers_ordered_by_return_period() {
        let db = setup_test_db().await;

        let mut a = test_layer(1);
        a.return_period = Some(100);
        let mut b = test_layer(2);
        b.return_period = Some(10);
        db.sync_layer(&a, true).await.unwrap();
        db.sync_layer(&b, true).await.unwrap();

        let layers = db.list_layers_for_hazard_set("TEST_GLOBAL").await.unwrap();
        assert_eq!(layers[0].id, LayerId(2));
        assert_eq!(layers[1].id, LayerId(1));
    }

    #[tokio::test]
    async fn test_sync_document_replaces_associations() {
        let db = setup_test_db().await;

        db.create_region(&Region::new(RegionId(1), "World", 0))
            .await
            .unwrap();
        db.create_region(&Region::new(RegionId(2), "Test region", 3))
            .await
            .unwrap();

        let resource = FurtherResource::new(7, "Test document");
        db.sync_document(
            &resource,
            &[
                ResourceAssociation {
                    hazard_type: "earthquake".to_string(),
                    region_id: RegionId(1),
                },
                ResourceAssociation {
                    hazard_type: "earthquake".to_string(),
                    region_id: RegionId(2),
                },
            ],
        )
        .await
        .unwrap();

        assert_eq!(db.list_resource_associations(7).await.unwrap().len(), 2);

        // second sync drops the world-region association
        db.sync_document(
            &resource,
            &[ResourceAssociation {
                hazard_type: "earthquake".to_string(),
                region_id: RegionId(2),
            }],
        )
        .await
        .unwrap();

        let assocs = db.list_resource_associations(7).await.unwrap();
        assert_eq!(assocs.len(), 1);
        assert_eq!(assocs[0].region_id, RegionId(2));
    }

    #[tokio::test]
    async fn test_category_info_for_division() {
        let db = setup_test_db().await;

        let ht = db
            .create_hazard_type(&HazardType {
                id: 0,
                mnemonic: "FL".to_string(),
                title: "River flood".to_string(),
                order: 1,
                ready: true,
            })
            .await
            .unwrap();
        let level = db
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
                hazard_type_id: ht.id,
                hazard_level_id: level.id,
                general_recommendation: Some("Head for the hills.".to_string()),
            })
            .await
            .unwrap();

        db.create_division(&AdministrativeDivision {
            code: 31,
            leveltype_id: 1,
            name: "Testland".to_string(),
            parent_code: None,
            geom: None,
        })
        .await
        .unwrap();
        db.associate_category_division(31, category.id).await.unwrap();

        let info = db.get_category_info(31, "FL").await.unwrap().unwrap();
        assert_eq!(info.hazard_level.mnemonic, "HIG");
        assert_eq!(
            info.general_recommendation.as_deref(),
            Some("Head for the hills.")
        );

        // unknown hazard type or unassociated division yields none
        assert!(db.get_category_info(31, "EQ").await.unwrap().is_none());
        assert!(db.get_category_info(32, "FL").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_further_resources_for_division_prefers_specific_region() {
        let db = setup_test_db().await;

        db.create_region(&Region::new(RegionId(1), "World", 0))
            .await
            .unwrap();
        db.create_region(&Region::new(RegionId(2), "Testland", 3))
            .await
            .unwrap();
        db.create_division(&AdministrativeDivision {
            code: 31,
            leveltype_id: 1,
            name: "Testland".to_string(),
            parent_code: None,
            geom: None,
        })
        .await
        .unwrap();
        db.associate_region_division(RegionId(1), 31).await.unwrap();
        db.associate_region_division(RegionId(2), 31).await.unwrap();

        db.sync_document(
            &FurtherResource::new(1, "Global doc"),
            &[ResourceAssociation {
                hazard_type: "earthquake".to_string(),
                region_id: RegionId(1),
            }],
        )
        .await
        .unwrap();
        db.sync_document(
            &FurtherResource::new(2, "Local doc"),
            &[ResourceAssociation {
                hazard_type: "earthquake".to_string(),
                region_id: RegionId(2),
            }],
        )
        .await
        .unwrap();

        let resources = db
            .list_further_resources_for(31, "earthquake")
            .await
            .unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].text, "Local doc");
        assert_eq!(resources[1].text, "Global doc");
    }
}
