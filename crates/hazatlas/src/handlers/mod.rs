//! http request handlers for the report endpoints.

mod data_source;
mod error;
mod health;
mod report;

pub use data_source::data_source;
pub use error::{ApiError, OptionExt, ResultExt};
pub use health::health;
pub use report::{report_category, report_geojson, report_overview};
