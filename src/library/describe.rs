use std::fs::{self, Metadata};
use std::path::Path;

use super::error::{CatalogError, PathKind};
use super::format::audio_extension;
use super::model::Track;

/// Artist used when a file name carries no `"Artist - Title"` separator.
pub const UNKNOWN_ARTIST: &str = "unknown artist";

const ARTIST_TITLE_SEPARATOR: &str = " - ";

/// Split an extension-less file name into `(artist, title)`.
///
/// Only the first `" - "` counts; everything after it (further separators
/// included) is the title. Without a separator the artist is
/// [`UNKNOWN_ARTIST`] and the title is the name as given.
pub fn split_artist_title(stem: &str) -> (String, String) {
    match stem.split_once(ARTIST_TITLE_SEPARATOR) {
        Some((artist, title)) => (artist.trim().to_string(), title.trim().to_string()),
        None => (UNKNOWN_ARTIST.to_string(), stem.to_string()),
    }
}

/// Stat a single file and derive its track metadata from the file name.
///
/// The file does not need a supported extension; it only has to be an
/// existing regular file.
pub fn describe(path: &Path) -> Result<Track, CatalogError> {
    let meta = fs::metadata(path).map_err(|e| CatalogError::from_stat(path, PathKind::File, e))?;
    if !meta.is_file() {
        return Err(CatalogError::invalid_path(path, PathKind::File));
    }
    let path = std::path::absolute(path).map_err(|e| CatalogError::access(path, e))?;
    track_from_metadata(&path, &meta)
}

/// Build a `Track` from metadata the caller already holds. `path` should be
/// absolute.
pub(crate) fn track_from_metadata(path: &Path, meta: &Metadata) -> Result<Track, CatalogError> {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let extension = match audio_extension(&file_name) {
        Some(ext) => ext.to_string(),
        None => path
            .extension()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());
    let (artist, title) = split_artist_title(&stem);

    let modified = meta.modified().map_err(|e| CatalogError::access(path, e))?;

    Ok(Track {
        path: path.to_path_buf(),
        file_name,
        extension,
        size: meta.len(),
        modified,
        title,
        artist,
    })
}
