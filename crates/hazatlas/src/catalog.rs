//! geonode catalog client.
//!
//! fetches paginated metadata records (regions, layers, documents) and
//! per-resource detail from a remote geonode instance. any non-2xx
//! response fails the current sync pass with the status and the raw
//! response body; callers never apply partial data from a failed fetch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use hazatlas_types::{GeonodeConfig, Layer, LayerId};

/// a raw catalog record: a mapping of field name to json value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// http request failed (timeout, connection refused, ...)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// the catalog returned a non-2xx response
    #[error("geonode returned status {status}: {body}")]
    RemoteService {
        /// http status code
        status: u16,
        /// raw response body, verbatim
        body: String,
    },
    /// a record was malformed or missing required fields
    #[error("invalid catalog record: {0}")]
    Decode(String),
}

/// one page of a paginated list endpoint.
#[derive(Debug, Deserialize)]
struct ListPage {
    objects: Vec<Record>,
}

/// owner block of a layer detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    /// owning organization, often empty
    #[serde(default)]
    pub organization: Option<String>,
}

/// full layer detail as returned by `/api/layers/{id}/`.
///
/// `id`, `hazard_set`, `hazard_type` and `title` are required; a record
/// without them is a fatal data error for the sync pass.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct LayerDetail {
    pub id: i64,
    pub hazard_set: String,
    pub hazard_type: String,
    pub title: String,
    #[serde(default)]
    pub typename: Option<String>,
    #[serde(default)]
    pub srid: Option<String>,
    #[serde(default)]
    pub detail_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub data_update_date: Option<String>,
    #[serde(default)]
    pub metadata_update_date: Option<String>,
    #[serde(default)]
    pub calculation_method_quality: Option<i32>,
    #[serde(default)]
    pub scientific_quality: Option<i32>,
    #[serde(default)]
    pub hazard_period: Option<i32>,
    #[serde(default)]
    pub hazard_unit: Option<String>,
    #[serde(default)]
    pub return_period: Option<i32>,
}

impl LayerDetail {
    /// convert into the domain layer, normalizing catalog timestamps.
    pub fn into_layer(self) -> Result<Layer, CatalogError> {
        let data_update_date = match self.data_update_date.as_deref() {
            Some(s) => Some(parse_catalog_datetime(s)?),
            None => None,
        };
        let metadata_update_date = match self.metadata_update_date.as_deref() {
            Some(s) => Some(parse_catalog_datetime(s)?),
            None => None,
        };

        Ok(Layer {
            id: LayerId(self.id),
            hazard_set: self.hazard_set,
            hazard_type: self.hazard_type,
            typename: self.typename,
            title: self.title,
            srid: self.srid,
            detail_url: self.detail_url,
            download_url: self.download_url,
            owner_organization: self
                .owner
                .and_then(|o| o.organization)
                .filter(|s| !s.is_empty()),
            data_update_date,
            metadata_update_date,
            calculation_method_quality: self.calculation_method_quality,
            scientific_quality: self.scientific_quality,
            hazard_period: self.hazard_period,
            hazard_unit: self.hazard_unit,
            return_period: self.return_period,
        })
    }
}

/// full document detail as returned by `/api/documents/{id}/`.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct DocumentDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub csw_type: Option<String>,
    #[serde(default)]
    pub hazard_type: Option<String>,
    /// region names or ids the document applies to
    #[serde(default)]
    pub regions: Vec<serde_json::Value>,
    #[serde(default)]
    pub supplemental_information: Option<String>,
}

/// region record as returned by `/api/regions/`.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct RegionRecord {
    pub id: i64,
    pub name_en: String,
    pub level: i32,
}

/// client for the geonode catalog api.
pub struct GeonodeClient {
    client: Client,
    base_url: String,
    page_size: u32,
    api_token: Option<SecretString>,
}

impl GeonodeClient {
    /// create a new client from config.
    pub fn new(config: &GeonodeConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
            api_token: config.api_token.clone(),
        })
    }

    /// fetch all records of a list endpoint, walking pages until a short page.
    ///
    /// each invocation starts from offset 0; the sequence is finite and not
    /// restartable. an optional `filter` is appended as a query parameter.
    pub async fn list(
        &self,
        resource: &str,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<Record>, CatalogError> {
        let mut records = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let mut url = format!(
                "{}/api/{}/?limit={}&offset={}",
                self.base_url, resource, self.page_size, offset
            );
            if let Some((key, value)) = filter {
                url.push_str(&format!("&{}={}", key, value));
            }

            let body = self.get_text(&url).await?;
            let page: ListPage = serde_json::from_str(&body)
                .map_err(|e| CatalogError::Decode(format!("{} list page: {}", resource, e)))?;

            let fetched = page.objects.len() as u32;
            records.extend(page.objects);
            if fetched < self.page_size {
                break;
            }
            offset += self.page_size;
        }

        Ok(records)
    }

    /// fetch the full detail of a layer.
    pub async fn layer_detail(&self, id: i64) -> Result<LayerDetail, CatalogError> {
        let url = format!("{}/api/layers/{}/", self.base_url, id);
        let body = self.get_text(&url).await?;
        serde_json::from_str(&body)
            .map_err(|e| CatalogError::Decode(format!("layer {} detail: {}", id, e)))
    }

    /// fetch the full detail of a document.
    pub async fn document_detail(&self, id: i64) -> Result<DocumentDetail, CatalogError> {
        let url = format!("{}/api/documents/{}/", self.base_url, id);
        let body = self.get_text(&url).await?;
        serde_json::from_str(&body)
            .map_err(|e| CatalogError::Decode(format!("document {} detail: {}", id, e)))
    }

    /// issue a get request, failing on any non-2xx status with the raw body.
    async fn get_text(&self, url: &str) -> Result<String, CatalogError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::RemoteService {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

/// parse a catalog timestamp into a normalized utc instant.
///
/// geonode emits ISO-8601 strings of varying precision, with or without a
/// timezone suffix. naive timestamps are taken as utc.
pub fn parse_catalog_datetime(s: &str) -> Result<DateTime<Utc>, CatalogError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(CatalogError::Decode(format!("unparseable datetime: {}", s)))
}
