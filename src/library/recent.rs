use std::path::Path;
use std::time::{Duration, SystemTime};

use super::error::CatalogError;
use super::model::Catalog;
use super::scan::{ScanOptions, scan};

/// Window used when the caller does not pick one.
pub const DEFAULT_RECENT_DAYS: f64 = 7.0;

const SECS_PER_DAY: f64 = 24.0 * 3600.0;

/// Tracks modified within the last `days` days, most recent first.
///
/// `days` must be finite and greater than zero; anything else is rejected
/// before the tree is walked.
pub fn recently_added(root: &Path, days: f64, options: &ScanOptions) -> Result<Catalog, CatalogError> {
    recently_added_at(root, days, SystemTime::now(), options)
}

pub(crate) fn recently_added_at(
    root: &Path,
    days: f64,
    now: SystemTime,
    options: &ScanOptions,
) -> Result<Catalog, CatalogError> {
    if !days.is_finite() || days <= 0.0 {
        return Err(CatalogError::InvalidWindow { days });
    }

    // A window reaching past the start of the clock keeps everything.
    let threshold = Duration::try_from_secs_f64(days * SECS_PER_DAY)
        .ok()
        .and_then(|window| now.checked_sub(window));

    let mut tracks: Catalog = scan(root, options)?
        .into_iter()
        .filter(|t| threshold.is_none_or(|th| t.modified > th))
        .collect();

    // Stable: equal timestamps keep name order.
    tracks.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(tracks)
}
