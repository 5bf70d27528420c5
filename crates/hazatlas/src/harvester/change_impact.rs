//! change-impact evaluation for layer sync.
//!
//! decides whether a hazard set's derived `complete`/`processed` status
//! must be reset, given the stored layer (if any) and the freshly
//! fetched one. only the four comparison-relevant fields participate;
//! descriptive fields (title, urls, typename, srid) never trigger a
//! reset, so re-harvesting unchanged data is a no-op for the status.

use hazatlas_types::Layer;

/// returns true when syncing `new` over `old` must invalidate the
/// owning hazard set.
///
/// a layer never seen before is always impactful. dates are compared as
/// normalized instants, not source strings.
pub fn invalidates(old: Option<&Layer>, new: &Layer) -> bool {
    let Some(old) = old else {
        return true;
    };

    old.data_update_date != new.data_update_date
        || old.metadata_update_date != new.metadata_update_date
        || old.calculation_method_quality != new.calculation_method_quality
        || old.scientific_quality != new.scientific_quality
}
